//! Concrete query actions and the default dispatch table.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::info;

use atlasq_engine::{Action, ActionOutcome, Binding, Pattern, PatternActionTable};

use crate::client::WikiClient;
use crate::fields::InfoboxFields;

/// Which infobox fact a [`CountryFactAction`] answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFact {
    Area,
    Population,
    WaterPercentage,
    WaterAmount,
}

/// Resolves one country fact: joins the bound span into a country name,
/// fetches that country's infobox text, and extracts the field.
pub struct CountryFactAction {
    fact: CountryFact,
    client: Arc<WikiClient>,
    fields: Arc<InfoboxFields>,
}

impl CountryFactAction {
    #[must_use]
    pub const fn new(fact: CountryFact, client: Arc<WikiClient>, fields: Arc<InfoboxFields>) -> Self {
        Self {
            fact,
            client,
            fields,
        }
    }
}

#[async_trait]
impl Action for CountryFactAction {
    fn name(&self) -> &str {
        match self.fact {
            CountryFact::Area => "country_area",
            CountryFact::Population => "country_population",
            CountryFact::WaterPercentage => "water_percentage",
            CountryFact::WaterAmount => "water_amount",
        }
    }

    async fn run(&self, binding: Binding) -> Result<ActionOutcome> {
        let country = binding
            .entity(0)
            .ok_or_else(|| anyhow!("Query pattern bound no country name"))?;

        info!("Resolving {} for '{country}'", self.name());
        let infobox_text = self.client.infobox_text(&country).await?;

        let answer = match self.fact {
            CountryFact::Area => self.fields.area(&infobox_text)?,
            CountryFact::Population => self.fields.population(&infobox_text)?,
            CountryFact::WaterPercentage => self.fields.water_percent(&infobox_text)?,
            CountryFact::WaterAmount => self.fields.water_amount(&infobox_text)?,
        };

        Ok(ActionOutcome::Answers(vec![answer]))
    }
}

/// Ends the session. The binding is ignored.
pub struct ByeAction;

#[async_trait]
impl Action for ByeAction {
    fn name(&self) -> &str {
        "bye"
    }

    async fn run(&self, _binding: Binding) -> Result<ActionOutcome> {
        Ok(ActionOutcome::EndSession)
    }
}

/// Build the country-facts dispatch table.
///
/// Order matters: the water templates sit above the generic
/// `what is the ...` ones, and queries resolve via the first entry that
/// matches.
pub fn default_table(client: Arc<WikiClient>) -> Result<PatternActionTable> {
    let fields = Arc::new(InfoboxFields::new()?);
    let fact = |fact| {
        Box::new(CountryFactAction::new(
            fact,
            Arc::clone(&client),
            Arc::clone(&fields),
        ))
    };

    let mut table = PatternActionTable::new();
    table.register(
        Pattern::parse("how much of % is water"),
        fact(CountryFact::WaterAmount),
    );
    table.register(
        Pattern::parse("what percentage of % is water"),
        fact(CountryFact::WaterPercentage),
    );
    table.register(
        Pattern::parse("what is the area of %"),
        fact(CountryFact::Area),
    );
    table.register(
        Pattern::parse("what is the population of %"),
        fact(CountryFact::Population),
    );
    table.register(Pattern::parse("bye"), Box::new(ByeAction));

    Ok(table)
}
