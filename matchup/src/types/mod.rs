//! Domain types for type matchups

mod pokemon_type;
mod profile;

pub use pokemon_type::{TYPE_CHART, TYPE_COUNT, Type};
pub use profile::TypeProfile;
