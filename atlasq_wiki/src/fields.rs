//! Regex extraction of infobox fields.
//!
//! Works on cleaned infobox text (see [`crate::infobox`]): printable
//! ASCII, single spaces, single newlines. Figures keep their comma
//! grouping, so numeric work goes through a comma-stripping parse.

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// Compiled extractors for the infobox fields the query table answers
/// with. Built once and shared across actions.
pub struct InfoboxFields {
    area: Regex,
    population: Regex,
    water_percent: Regex,
}

impl InfoboxFields {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // "Area ... Total 643,801 km2"; an optional bare number after
            // Total skips footnote markers that survive cleaning.
            area: Regex::new(r"(?is)Area\s*Total\s*(?:\d+\s+)?(?P<area>[\d,.]+)")?,
            // "Population ... 68,416,000"; the label line may carry a year
            // or estimate note before the figure.
            population: Regex::new(r"(?is)Population(?: [^\n\r]*)?[:\s]+(?P<population>[\d,]+)")?,
            // "Water (%) 0.86"
            water_percent: Regex::new(r"(?is)Water\s*\(%\)\s*(?P<perc>[0-9]+(?:\.[0-9]+)?)")?,
        })
    }

    /// Total area figure, as printed in the infobox.
    pub fn area(&self, infobox_text: &str) -> Result<String> {
        capture(&self.area, "area", infobox_text)
            .ok_or_else(|| anyhow!("Page infobox has no area information"))
    }

    /// Population figure, as printed in the infobox.
    pub fn population(&self, infobox_text: &str) -> Result<String> {
        capture(&self.population, "population", infobox_text)
            .ok_or_else(|| anyhow!("Page infobox has no population information"))
    }

    /// Water coverage percentage, as printed in the infobox.
    pub fn water_percent(&self, infobox_text: &str) -> Result<String> {
        capture(&self.water_percent, "perc", infobox_text)
            .ok_or_else(|| anyhow!("Page infobox has no water information"))
    }

    /// Water area derived from total area and water percentage, rounded
    /// to a whole figure.
    pub fn water_amount(&self, infobox_text: &str) -> Result<String> {
        let area = parse_figure(&self.area(infobox_text)?)?;
        let percent = parse_figure(&self.water_percent(infobox_text)?)?;

        let amount = (area * percent / 100.0).round();
        Ok(format!("{amount:.0}"))
    }
}

fn capture(regex: &Regex, group: &str, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.name(group))
        .map(|m| m.as_str().to_string())
}

/// Parse a comma-grouped figure like `643,801` or `0.86`.
fn parse_figure(figure: &str) -> Result<f64> {
    figure
        .replace(',', "")
        .parse::<f64>()
        .with_context(|| format!("Infobox figure '{figure}' is not a number"))
}
