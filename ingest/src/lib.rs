//! Pokemon record ingestion.
//!
//! Reads Pokemon records in the shape the public data API serves them,
//! derives each record's type profile from its slotted type entries, and
//! attaches the four relation lists computed by `typedex-matchup`.
//!
//! ```
//! use typedex_ingest::{enrich_batch, parse_records};
//!
//! let json = r#"[
//!     {"id": 6, "name": "charizard", "types": [
//!         {"slot": 2, "type": {"name": "flying"}},
//!         {"slot": 1, "type": {"name": "fire"}}
//!     ]}
//! ]"#;
//!
//! let records = parse_records(json).unwrap();
//! let report = enrich_batch(&records);
//! assert_eq!(report.succeeded(), 1);
//! assert_eq!(report.enriched[0].types.to_string(), "fire/flying");
//! ```

use thiserror::Error;
use typedex_matchup::MatchupError;

mod batch;
mod record;

pub use batch::{BatchReport, SkippedRecord, enrich_batch};
pub use record::{
    EnrichedPokemon, NamedResource, PokemonRecord, Sprites, StatEntry, Stats, TypeSlot, enrich,
    parse_records,
};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Matchup(#[from] MatchupError),

    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}
