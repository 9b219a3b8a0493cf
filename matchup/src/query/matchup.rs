//! Type matchup helpers over raw type slices

use crate::types::Type;

/// Category a combined multiplier falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matchup {
    /// Exactly 0x
    Immune,
    /// Strictly between 0x and 1x
    Resisted,
    /// Exactly 1x
    Neutral,
    /// Above 1x, whether 2x or 4x
    SuperEffective,
}

impl Matchup {
    /// Partition a multiplier by the fixed category boundaries
    pub fn classify(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Matchup::Immune
        } else if multiplier < 1.0 {
            Matchup::Resisted
        } else if multiplier > 1.0 {
            Matchup::SuperEffective
        } else {
            Matchup::Neutral
        }
    }
}

/// How a move of `attacking_type` lands on a defender with `defender_types`
pub fn matchup(defender_types: &[Type], attacking_type: Type) -> Matchup {
    Matchup::classify(attacking_type.effectiveness_multi(defender_types))
}

/// Attacking types, in canonical order, that land on the defender as `category`
fn defending_in(defender_types: &[Type], category: Matchup) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|&t| matchup(defender_types, t) == category)
        .collect()
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|&t| matchup(defender_types, t) == Matchup::SuperEffective)
}

/// Check if defender takes reduced damage (0 < x < 1) from every attacking type.
///
/// An immunity is not a resistance, and an empty attacker list resists nothing.
pub fn resists_all(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    !attacking_types.is_empty()
        && attacking_types
            .iter()
            .all(|&t| matchup(defender_types, t) == Matchup::Resisted)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(defender_types: &[Type], attacking_type: Type) -> bool {
    matchup(defender_types, attacking_type) == Matchup::Immune
}

/// All types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    defending_in(defender_types, Matchup::SuperEffective)
}

/// All types the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    defending_in(defender_types, Matchup::Resisted)
}

/// All types the defender is immune to
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    defending_in(defender_types, Matchup::Immune)
}

/// All defending types that at least one of `attacking_types` hits super effectively
pub fn coverage(attacking_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|&t| Type::best_effectiveness(attacking_types, t) > 1.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Matchup::classify(0.0), Matchup::Immune);
        assert_eq!(Matchup::classify(0.25), Matchup::Resisted);
        assert_eq!(Matchup::classify(0.5), Matchup::Resisted);
        assert_eq!(Matchup::classify(1.0), Matchup::Neutral);
        assert_eq!(Matchup::classify(2.0), Matchup::SuperEffective);
        assert_eq!(Matchup::classify(4.0), Matchup::SuperEffective);
    }

    #[test]
    fn test_is_weak_to_any() {
        let water = [Type::Water];
        assert!(is_weak_to_any(&water, &[Type::Electric, Type::Grass]));
        assert!(!is_weak_to_any(&water, &[Type::Fire, Type::Ice]));
        assert!(!is_weak_to_any(&water, &[]));
    }

    #[test]
    fn test_resists_all() {
        let steel = [Type::Steel];
        assert!(resists_all(&steel, &[Type::Normal, Type::Ice, Type::Fairy]));
        assert!(!resists_all(&steel, &[Type::Fire, Type::Ice]));
        // Poison is an immunity, not a resistance
        assert!(!resists_all(&steel, &[Type::Poison]));
        assert!(!resists_all(&steel, &[]));
    }

    #[test]
    fn test_is_immune_to() {
        let ghost = [Type::Ghost];
        assert!(is_immune_to(&ghost, Type::Normal));
        assert!(is_immune_to(&ghost, Type::Fighting));
        assert!(!is_immune_to(&ghost, Type::Dark));

        assert!(is_immune_to(&[Type::Normal], Type::Ghost));
        assert!(is_immune_to(&[Type::Ground], Type::Electric));
        assert!(is_immune_to(&[Type::Water, Type::Flying], Type::Ground));
    }

    #[test]
    fn test_weaknesses() {
        assert_eq!(
            weaknesses(&[Type::Steel]),
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground is only weak to Grass (4x)
        assert_eq!(weaknesses(&[Type::Water, Type::Ground]), vec![Type::Grass]);
    }

    #[test]
    fn test_resistances() {
        let resists = resistances(&[Type::Steel]);
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Ice));
        assert!(resists.contains(&Type::Fairy));
        assert!(!resists.contains(&Type::Fire));
        assert!(!resists.contains(&Type::Poison));
        assert_eq!(resists.len(), 10);
    }

    #[test]
    fn test_immunities() {
        assert_eq!(immunities(&[Type::Ghost]), vec![Type::Normal, Type::Fighting]);
        assert_eq!(
            immunities(&[Type::Normal, Type::Ghost]),
            vec![Type::Normal, Type::Fighting, Type::Ghost]
        );
        assert!(immunities(&[Type::Fire]).is_empty());
    }

    #[test]
    fn test_coverage() {
        assert_eq!(
            coverage(&[Type::Fire]),
            vec![Type::Grass, Type::Ice, Type::Bug, Type::Steel]
        );
        // Ground/Flying: Ground's hits plus Flying's, no combination
        assert_eq!(
            coverage(&[Type::Ground, Type::Flying]),
            vec![
                Type::Fire,
                Type::Electric,
                Type::Grass,
                Type::Fighting,
                Type::Poison,
                Type::Bug,
                Type::Rock,
                Type::Steel,
            ]
        );
        assert!(coverage(&[Type::Normal]).is_empty());
    }
}
