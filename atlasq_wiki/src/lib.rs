#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Wikipedia-backed data resolvers for the country-facts query engine.
//!
//! Answers come from the first infobox of a country's Wikipedia page:
//! the page is located through the MediaWiki search API, its rendered
//! HTML fetched, the infobox isolated and flattened to clean text, and
//! the requested field pulled out with a regular expression.

pub mod actions;
pub mod client;
pub mod fields;
pub mod infobox;

pub use actions::{ByeAction, CountryFact, CountryFactAction, default_table};
pub use client::{WikiClient, WikiConfig};
pub use fields::InfoboxFields;
pub use infobox::{clean_text, first_infobox, strip_tags};
