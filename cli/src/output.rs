//! Human-readable rendering

use std::fmt::Write;

use typedex_ingest::EnrichedPokemon;
use typedex_matchup::{Type, TypeProfile, TypeRelations};

fn join(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types
        .iter()
        .map(|t| t.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn profile_name(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.display_name())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn render_relations(profile: &TypeProfile, relations: &TypeRelations) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile_name(profile.types()));
    let _ = writeln!(out, "  Strong against: {}", join(&relations.strong_against));
    let _ = writeln!(out, "  Weak against:   {}", join(&relations.weak_against));
    let _ = writeln!(out, "  Resistant to:   {}", join(&relations.resistant_to));
    let _ = writeln!(out, "  Immune to:      {}", join(&relations.immune_to));
    out
}

/// The `count` records with the lowest Pokedex numbers, in ascending order
pub fn lowest_numbered(enriched: &[EnrichedPokemon], count: usize) -> Vec<&EnrichedPokemon> {
    let mut sorted: Vec<&EnrichedPokemon> = enriched.iter().collect();
    sorted.sort_by_key(|p| p.pokedex_number);
    sorted.truncate(count);
    sorted
}

/// One-line summary of an enriched record
pub fn render_sample(pokemon: &EnrichedPokemon) -> String {
    format!(
        "#{} {} ({}) strong against: {}; weak against: {}",
        pokemon.pokedex_number,
        pokemon.name,
        profile_name(pokemon.types.types()),
        join(&pokemon.relations.strong_against),
        join(&pokemon.relations.weak_against),
    )
}
