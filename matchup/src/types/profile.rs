//! A Pokemon's one or two elemental types

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pokemon_type::Type;
use crate::query::{Multipliers, TypeRelations};
use crate::{MatchupError, ProfileViolation};

/// One or two distinct types, primary first.
///
/// Only the constructors below produce a `TypeProfile`, so every value
/// already satisfies the length and distinctness rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Type>", try_from = "Vec<Type>")
)]
pub struct TypeProfile {
    types: [Type; 2],
    len: usize,
}

impl TypeProfile {
    /// Profile for a mono-typed Pokemon
    pub fn single(primary: Type) -> Self {
        Self {
            types: [primary, primary],
            len: 1,
        }
    }

    /// Profile for a dual-typed Pokemon
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, MatchupError> {
        if primary == secondary {
            return Err(MatchupError::InvalidTypeProfile(
                ProfileViolation::DuplicateType(primary),
            ));
        }
        Ok(Self {
            types: [primary, secondary],
            len: 2,
        })
    }

    /// Build from an already-typed slice
    pub fn new(types: &[Type]) -> Result<Self, MatchupError> {
        match *types {
            [] => Err(MatchupError::InvalidTypeProfile(ProfileViolation::Empty)),
            [primary] => Ok(Self::single(primary)),
            [primary, secondary] => Self::dual(primary, secondary),
            _ => Err(MatchupError::InvalidTypeProfile(
                ProfileViolation::TooManyTypes(types.len()),
            )),
        }
    }

    /// Build from type identifiers.
    ///
    /// The count is checked before any identifier is looked up, and every
    /// identifier is looked up before duplicates are checked.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, MatchupError> {
        match names.len() {
            0 => return Err(MatchupError::InvalidTypeProfile(ProfileViolation::Empty)),
            1 | 2 => {}
            n => {
                return Err(MatchupError::InvalidTypeProfile(
                    ProfileViolation::TooManyTypes(n),
                ));
            }
        }

        let types = names
            .iter()
            .map(|name| name.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&types)
    }

    /// The types in slot order
    pub fn types(&self) -> &[Type] {
        &self.types[..self.len]
    }

    pub fn primary(&self) -> Type {
        self.types[0]
    }

    pub fn secondary(&self) -> Option<Type> {
        (self.len == 2).then_some(self.types[1])
    }

    pub fn contains(&self, t: Type) -> bool {
        self.types().contains(&t)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A profile always holds at least one type
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Per-opposing-type multipliers for this profile
    pub fn multipliers(&self) -> Multipliers {
        Multipliers::for_types(self.types())
    }

    /// The four categorized type lists for this profile
    pub fn relations(&self) -> TypeRelations {
        self.multipliers().relations()
    }
}

impl std::fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary() {
            Some(secondary) => write!(f, "{}/{}", self.primary(), secondary),
            None => write!(f, "{}", self.primary()),
        }
    }
}

/// Accepts `fire` or `ground/flying`
impl FromStr for TypeProfile {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(MatchupError::InvalidTypeProfile(ProfileViolation::Empty));
        }
        let names: Vec<&str> = s.split('/').collect();
        Self::parse(&names)
    }
}

impl From<TypeProfile> for Vec<Type> {
    fn from(profile: TypeProfile) -> Self {
        profile.types().to_vec()
    }
}

impl TryFrom<Vec<Type>> for TypeProfile {
    type Error = MatchupError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::new(&types)
    }
}
