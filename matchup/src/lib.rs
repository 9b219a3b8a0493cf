//! Type matchup engine for Pokemon type profiles.
//!
//! Given a Pokemon's one or two elemental types, this crate determines which
//! of the 18 types it hits super effectively, which hit it super effectively,
//! which it resists, and which it is immune to.
//!
//! # Rules
//!
//! - **Defense** multiplies the chart values of every type in the profile,
//!   so two weaknesses compound to 4x, a weakness and a resistance cancel to
//!   1x, and any immunity makes the result 0x.
//! - **Offense** takes the best single type in the profile. A move only ever
//!   has one type, so attacking multipliers are never combined.
//! - A combined multiplier falls into exactly one [`Matchup`] category:
//!   `0` immune, `(0, 1)` resisted, `1` neutral, `> 1` super effective.
//!
//! All output lists follow the canonical order of [`Type::ALL`].
//!
//! # Main Types
//!
//! - [`Type`] - the 18 types, with the static [`TYPE_CHART`]
//! - [`TypeProfile`] - a validated one- or two-type profile
//! - [`TypeRelations`] - the four categorized lists
//! - [`Multipliers`] - the per-type multipliers the categories come from
//!
//! # Example Usage
//!
//! ```
//! use typedex_matchup::{Type, compute_effectiveness};
//!
//! let relations = compute_effectiveness(&["ground", "flying"]).unwrap();
//! assert!(relations.immune_to.contains(&Type::Electric));
//! assert!(relations.weak_against.contains(&Type::Ice));
//! ```

use thiserror::Error;

pub mod query;
pub mod types;

pub use query::{
    Matchup, Multipliers, TypeRelations, compute_effectiveness, coverage, immunities,
    is_immune_to, is_weak_to_any, resistances, resists_all, weaknesses,
};
pub use types::{TYPE_CHART, TYPE_COUNT, Type, TypeProfile};

/// Why a type profile could not be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    #[error("Invalid type profile: {0}")]
    InvalidTypeProfile(ProfileViolation),

    #[error("Unknown type: {0:?}")]
    UnknownType(String),
}

/// Why a list of types is not a valid profile
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileViolation {
    #[error("no types given")]
    Empty,

    #[error("expected at most 2 types, got {0}")]
    TooManyTypes(usize),

    #[error("type {0} listed twice")]
    DuplicateType(Type),
}
