//! Batch enrichment with skip-and-continue

use serde_json::Value;

use crate::IngestError;
use crate::record::{EnrichedPokemon, PokemonRecord, enrich};

/// A record that could not be enriched
#[derive(Debug)]
pub struct SkippedRecord {
    /// Position in the input array
    pub index: usize,
    /// Pokedex number, if the entry carried a usable one
    pub id: Option<u32>,
    pub name: Option<String>,
    pub error: IngestError,
}

impl SkippedRecord {
    /// Name, id or array position, whichever the entry has
    pub fn label(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("#{id}"),
            (None, None) => format!("entry {}", self.index),
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Enriched records, in input order
    pub enriched: Vec<EnrichedPokemon>,
    /// Records that failed, in input order
    pub skipped: Vec<SkippedRecord>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.enriched.len()
    }

    pub fn failed(&self) -> usize {
        self.skipped.len()
    }

    /// Number of records processed
    pub fn total(&self) -> usize {
        self.succeeded() + self.failed()
    }
}

/// Decode and enrich every entry; a failing entry is logged and skipped
pub fn enrich_batch<'a, I>(entries: I) -> BatchReport
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut report = BatchReport::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let result = PokemonRecord::from_value(entry.clone()).and_then(|record| enrich(&record));

        match result {
            Ok(enriched) => {
                tracing::debug!(
                    id = enriched.pokedex_number,
                    name = %enriched.name,
                    "Enriched record"
                );
                report.enriched.push(enriched);
            }
            Err(e) => {
                let skipped = SkippedRecord {
                    index,
                    id: entry
                        .get("id")
                        .and_then(Value::as_u64)
                        .and_then(|id| u32::try_from(id).ok()),
                    name: entry.get("name").and_then(Value::as_str).map(str::to_string),
                    error: e,
                };
                tracing::warn!(
                    index,
                    record = %skipped.label(),
                    error = %skipped.error,
                    "Skipping record"
                );
                report.skipped.push(skipped);
            }
        }
    }

    report
}
