//! Integration tests for the full query pipeline: tokenize, match against
//! an ordered table, dispatch to the bound action.
//!
//! The table mirrors the real country-facts table but with stub actions,
//! so these tests exercise priority order, binding extraction, and the
//! sentinel answers without touching the network.

use async_trait::async_trait;
use atlasq_engine::{
    Action, ActionOutcome, Binding, NO_ANSWERS, NOT_UNDERSTOOD, Outcome, Pattern,
    PatternActionTable, tokenize,
};

/// Reports which fact was asked for and the bound country name.
struct FactStub {
    fact: &'static str,
}

#[async_trait]
impl Action for FactStub {
    fn name(&self) -> &str {
        self.fact
    }

    async fn run(&self, binding: Binding) -> anyhow::Result<ActionOutcome> {
        let country = binding
            .entity(0)
            .ok_or_else(|| anyhow::anyhow!("no country bound"))?;
        Ok(ActionOutcome::Answers(vec![format!(
            "{} of {country}",
            self.fact
        )]))
    }
}

struct ByeStub;

#[async_trait]
impl Action for ByeStub {
    fn name(&self) -> &str {
        "bye"
    }

    async fn run(&self, _binding: Binding) -> anyhow::Result<ActionOutcome> {
        Ok(ActionOutcome::EndSession)
    }
}

struct SilentStub;

#[async_trait]
impl Action for SilentStub {
    fn name(&self) -> &str {
        "silent"
    }

    async fn run(&self, _binding: Binding) -> anyhow::Result<ActionOutcome> {
        Ok(ActionOutcome::Answers(Vec::new()))
    }
}

/// Same template set and order as the real country-facts table.
fn build_table() -> PatternActionTable {
    let mut table = PatternActionTable::new();
    table.register(
        Pattern::parse("how much of % is water"),
        Box::new(FactStub {
            fact: "water amount",
        }),
    );
    table.register(
        Pattern::parse("what percentage of % is water"),
        Box::new(FactStub {
            fact: "water percentage",
        }),
    );
    table.register(
        Pattern::parse("what is the area of %"),
        Box::new(FactStub { fact: "area" }),
    );
    table.register(
        Pattern::parse("what is the population of %"),
        Box::new(FactStub { fact: "population" }),
    );
    table.register(Pattern::parse("bye"), Box::new(ByeStub));
    table
}

#[tokio::test]
async fn test_area_query_binds_country() {
    let table = build_table();
    let outcome = table
        .resolve(&tokenize("What is the area of France?"))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Answers(vec!["area of france".to_string()]));
}

#[tokio::test]
async fn test_water_query_binds_multi_word_country() {
    let table = build_table();
    let outcome = table
        .resolve(&tokenize("how much of the united states is water"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Answers(vec!["water amount of the united states".to_string()])
    );
}

#[tokio::test]
async fn test_population_query() {
    let table = build_table();
    let outcome = table
        .resolve(&tokenize("what is the population of papua new guinea"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Answers(vec!["population of papua new guinea".to_string()])
    );
}

#[tokio::test]
async fn test_unrelated_question_is_not_understood() {
    let table = build_table();
    let outcome = table
        .resolve(&tokenize("what color is the sky"))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Answers(vec![NOT_UNDERSTOOD.to_string()]));
}

#[tokio::test]
async fn test_bye_ends_the_session() {
    let table = build_table();
    let outcome = table.resolve(&tokenize("bye")).await.unwrap();
    assert_eq!(outcome, Outcome::EndSession);
}

#[tokio::test]
async fn test_registration_order_breaks_overlap_ties() {
    // A template registered first shadows a later one that also matches.
    let mut table = PatternActionTable::new();
    table.register(
        Pattern::parse("what is the % of france"),
        Box::new(FactStub { fact: "specific" }),
    );
    table.register(
        Pattern::parse("what is the area of %"),
        Box::new(FactStub { fact: "general" }),
    );

    let outcome = table
        .resolve(&tokenize("what is the area of france"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Answers(vec!["specific of area".to_string()])
    );
}

#[tokio::test]
async fn test_empty_answers_surface_sentinel() {
    let mut table = PatternActionTable::new();
    table.register(Pattern::parse("what is %"), Box::new(SilentStub));

    let outcome = table.resolve(&tokenize("what is this")).await.unwrap();
    assert_eq!(outcome, Outcome::Answers(vec![NO_ANSWERS.to_string()]));
}

#[tokio::test]
async fn test_repeated_resolution_is_stable() {
    let table = build_table();
    let input = tokenize("what percentage of brazil is water");

    let first = table.resolve(&input).await.unwrap();
    let second = table.resolve(&input).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        Outcome::Answers(vec!["water percentage of brazil".to_string()])
    );
}
