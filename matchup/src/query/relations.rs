//! Full effectiveness profile of a Pokemon: the four categorized type lists

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::matchup::Matchup;
use crate::MatchupError;
use crate::types::{TYPE_COUNT, Type, TypeProfile};

/// Types a Pokemon hits hard, is hit hard by, resists, and ignores.
///
/// Each list is in canonical type order with no repeats. Neutral matchups
/// appear in none of the defensive lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypeRelations {
    /// Defending types at least one of the Pokemon's types hits for >1x
    pub strong_against: Vec<Type>,
    /// Attacking types whose combined multiplier on the Pokemon is >1x
    pub weak_against: Vec<Type>,
    /// Attacking types whose combined multiplier is strictly between 0x and 1x
    pub resistant_to: Vec<Type>,
    /// Attacking types whose combined multiplier is 0x
    pub immune_to: Vec<Type>,
}

/// Per-opposing-type multipliers for a set of types, indexed by [`Type::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    defending: [f32; TYPE_COUNT],
    attacking: [f32; TYPE_COUNT],
}

impl Multipliers {
    /// Defending side multiplies across `types`; attacking side takes the best single type.
    pub fn for_types(types: &[Type]) -> Self {
        let mut defending = [1.0; TYPE_COUNT];
        let mut attacking = [0.0; TYPE_COUNT];

        for &other in Type::all() {
            defending[other.index()] = other.effectiveness_multi(types);
            attacking[other.index()] = Type::best_effectiveness(types, other);
        }

        Self {
            defending,
            attacking,
        }
    }

    /// Combined multiplier a move of `attacker` deals to this Pokemon
    pub fn defending(&self, attacker: Type) -> f32 {
        self.defending[attacker.index()]
    }

    /// Best multiplier this Pokemon's own types deal to `defender`
    pub fn attacking(&self, defender: Type) -> f32 {
        self.attacking[defender.index()]
    }

    /// Category of an incoming attack of type `attacker`
    pub fn defending_matchup(&self, attacker: Type) -> Matchup {
        Matchup::classify(self.defending(attacker))
    }

    pub fn relations(&self) -> TypeRelations {
        let mut relations = TypeRelations::default();

        for &other in Type::all() {
            if self.attacking(other) > 1.0 {
                relations.strong_against.push(other);
            }

            match self.defending_matchup(other) {
                Matchup::SuperEffective => relations.weak_against.push(other),
                Matchup::Resisted => relations.resistant_to.push(other),
                Matchup::Immune => relations.immune_to.push(other),
                Matchup::Neutral => {}
            }
        }

        relations
    }
}

/// Compute the four relation lists for a Pokemon's type identifiers.
///
/// Fails with [`MatchupError::InvalidTypeProfile`] for zero, more than two,
/// or repeated types, and with [`MatchupError::UnknownType`] for an
/// identifier outside the 18-type universe.
pub fn compute_effectiveness<S: AsRef<str>>(types: &[S]) -> Result<TypeRelations, MatchupError> {
    let profile = TypeProfile::parse(types).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected type profile");
    })?;
    Ok(profile.relations())
}
