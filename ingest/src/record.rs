//! Input and output record shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use typedex_matchup::{MatchupError, TypeProfile, TypeRelations};

use crate::IngestError;

/// The parts of a data-API Pokemon record that are stored and served.
///
/// Unknown fields (abilities, moves, ...) are ignored. Everything except
/// `id`, `name` and `types` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonRecord {
    /// National Pokedex number
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

/// One entry of a record's `types` array: `{"slot": 1, "type": {"name": "fire"}}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    /// 1 for the primary type, 2 for the secondary
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

/// One entry of a record's `stats` array: `{"base_stat": 39, "stat": {"name": "hp"}}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Base stats keyed the way they are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Collect base stats from the data-API stat list; unknown stat names are ignored
    pub fn from_entries(entries: &[StatEntry]) -> Self {
        let mut stats = Stats::default();
        for entry in entries {
            let slot = match entry.stat.name.as_str() {
                "hp" => &mut stats.hp,
                "attack" => &mut stats.attack,
                "defense" => &mut stats.defense,
                "special-attack" => &mut stats.special_attack,
                "special-defense" => &mut stats.special_defense,
                "speed" => &mut stats.speed,
                _ => continue,
            };
            *slot = entry.base_stat;
        }
        stats
    }
}

impl PokemonRecord {
    /// Decode one entry of a record array
    pub fn from_value(value: Value) -> Result<Self, IngestError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Type identifiers, primary slot first
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.iter().map(|s| s.kind.name.as_str()).collect()
    }

    pub fn profile(&self) -> Result<TypeProfile, MatchupError> {
        TypeProfile::parse(self.type_names().as_slice())
    }
}

/// A Pokemon record ready to be stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPokemon {
    pub pokedex_number: u32,
    pub name: String,
    pub types: TypeProfile,
    pub sprite: Option<String>,
    pub sprite_shiny: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub stats: Stats,
    #[serde(flatten)]
    pub relations: TypeRelations,
}

/// Derive the profile of one record and attach its relations
pub fn enrich(record: &PokemonRecord) -> Result<EnrichedPokemon, IngestError> {
    let profile = record.profile()?;
    Ok(EnrichedPokemon {
        pokedex_number: record.id,
        name: record.name.clone(),
        types: profile,
        sprite: record.sprites.front_default.clone(),
        sprite_shiny: record.sprites.front_shiny.clone(),
        height: record.height,
        weight: record.weight,
        stats: Stats::from_entries(&record.stats),
        relations: profile.relations(),
    })
}

/// Parse a JSON array of records.
///
/// Only the outer array is checked here; each entry is decoded on its own
/// by [`enrich_batch`](crate::enrich_batch), so one malformed entry does
/// not reject the rest.
pub fn parse_records(json: &str) -> Result<Vec<Value>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use typedex_matchup::{ProfileViolation, Type};

    use super::*;

    fn record(id: u32, name: &str, types: &[(u8, &str)]) -> PokemonRecord {
        PokemonRecord {
            id,
            name: name.to_string(),
            types: types
                .iter()
                .map(|&(slot, name)| TypeSlot {
                    slot,
                    kind: NamedResource {
                        name: name.to_string(),
                    },
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let charizard = record(6, "charizard", &[(2, "flying"), (1, "fire")]);
        assert_eq!(charizard.type_names(), vec!["fire", "flying"]);
        assert_eq!(
            charizard.profile().unwrap().types(),
            &[Type::Fire, Type::Flying]
        );
    }

    #[test]
    fn test_profile_errors_propagate() {
        let missingno = record(0, "missingno", &[(1, "bird"), (2, "normal")]);
        assert_eq!(
            missingno.profile(),
            Err(MatchupError::UnknownType("bird".to_string()))
        );

        let untyped = record(1, "nothing", &[]);
        assert_eq!(
            untyped.profile(),
            Err(MatchupError::InvalidTypeProfile(ProfileViolation::Empty))
        );
    }

    #[test]
    fn test_from_value_ignores_extra_fields() {
        let json = r#"[{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://example.test/type/13/"}}]
        }]"#;
        let mut values = parse_records(json).unwrap();
        let pikachu = PokemonRecord::from_value(values.remove(0)).unwrap();
        assert_eq!(pikachu, record(25, "pikachu", &[(1, "electric")]));
    }

    #[test]
    fn test_from_value_reports_shape_errors() {
        let err = PokemonRecord::from_value(json!({"id": "six"})).unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }

    #[test]
    fn test_parse_records_requires_an_array() {
        let err = parse_records(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }

    #[test]
    fn test_stats_are_renamed() {
        let value = json!({
            "id": 4,
            "name": "charmander",
            "types": [{"slot": 1, "type": {"name": "fire"}}],
            "stats": [
                {"base_stat": 39, "stat": {"name": "hp"}},
                {"base_stat": 52, "stat": {"name": "attack"}},
                {"base_stat": 43, "stat": {"name": "defense"}},
                {"base_stat": 60, "stat": {"name": "special-attack"}},
                {"base_stat": 50, "stat": {"name": "special-defense"}},
                {"base_stat": 65, "stat": {"name": "speed"}},
                {"base_stat": 1, "stat": {"name": "accuracy"}}
            ]
        });
        let charmander = enrich(&PokemonRecord::from_value(value).unwrap()).unwrap();
        assert_eq!(
            charmander.stats,
            Stats {
                hp: 39,
                attack: 52,
                defense: 43,
                special_attack: 60,
                special_defense: 50,
                speed: 65,
            }
        );

        let stats = serde_json::to_value(charmander.stats).unwrap();
        assert_eq!(
            stats,
            json!({
                "hp": 39,
                "attack": 52,
                "defense": 43,
                "specialAttack": 60,
                "specialDefense": 50,
                "speed": 65
            })
        );
    }

    #[test]
    fn test_sprites_and_size_are_copied() {
        let value = json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": {
                "front_default": "https://example.test/25.png",
                "front_shiny": null,
                "back_default": "https://example.test/back/25.png"
            },
            "types": [{"slot": 1, "type": {"name": "electric"}}]
        });
        let pikachu = enrich(&PokemonRecord::from_value(value).unwrap()).unwrap();
        assert_eq!(pikachu.height, 4);
        assert_eq!(pikachu.weight, 60);
        assert_eq!(pikachu.sprite.as_deref(), Some("https://example.test/25.png"));
        assert_eq!(pikachu.sprite_shiny, None);

        let out = serde_json::to_value(&pikachu).unwrap();
        assert_eq!(out["sprite"], json!("https://example.test/25.png"));
        assert_eq!(out["spriteShiny"], json!(null));
        assert_eq!(out["stats"]["specialAttack"], json!(0));
    }

    #[test]
    fn test_enrich_output_shape() {
        let gengar = record(94, "gengar", &[(1, "ghost"), (2, "poison")]);
        let enriched = enrich(&gengar).unwrap();
        let value = serde_json::to_value(&enriched).unwrap();

        assert_eq!(value["pokedexNumber"], json!(94));
        assert_eq!(value["name"], json!("gengar"));
        assert_eq!(value["types"], json!(["ghost", "poison"]));
        assert_eq!(value["immuneTo"], json!(["normal", "fighting"]));
        assert_eq!(
            value["weakAgainst"],
            json!(["ground", "psychic", "ghost", "dark"])
        );
        assert!(value["strongAgainst"].is_array());
        assert!(value["resistantTo"].is_array());

        let back: EnrichedPokemon = serde_json::from_value(value).unwrap();
        assert_eq!(back, enriched);
    }

    #[test]
    fn test_enrich_rejects_same_type_twice() {
        let odd = record(7, "odd", &[(1, "water"), (2, "water")]);
        assert!(matches!(
            enrich(&odd),
            Err(IngestError::Matchup(MatchupError::InvalidTypeProfile(
                ProfileViolation::DuplicateType(Type::Water)
            )))
        ));
    }
}
