//! Matchup queries
//!
//! Single-question helpers over raw type slices, and the full
//! categorized relations for a validated [`TypeProfile`](crate::TypeProfile).

mod matchup;
mod relations;

pub use matchup::{
    Matchup,
    coverage,
    immunities,
    is_immune_to,
    is_weak_to_any,
    matchup,
    resistances,
    resists_all,
    weaknesses,
};
pub use relations::{Multipliers, TypeRelations, compute_effectiveness};
