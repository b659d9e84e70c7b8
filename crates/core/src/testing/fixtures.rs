//! Canonical record fixtures for tests.

use crate::pokeapi::{PokemonAbility, PokemonDetail, PokemonPage, PokemonStat, PokemonSummary};

fn ability(name: &str, is_hidden: bool) -> PokemonAbility {
    PokemonAbility {
        name: name.to_string(),
        is_hidden,
    }
}

fn stat(name: &str, value: i32) -> PokemonStat {
    PokemonStat {
        name: name.to_string(),
        value,
    }
}

pub fn bulbasaur() -> PokemonDetail {
    PokemonDetail {
        id: 1,
        name: "bulbasaur".to_string(),
        types: vec!["grass".to_string(), "poison".to_string()],
        abilities: vec![ability("overgrow", false), ability("chlorophyll", true)],
        stats: vec![stat("hp", 45), stat("attack", 49), stat("speed", 45)],
        sprite: Some("https://sprites.example/1.png".to_string()),
        height: 7,
        weight: 69,
    }
}

pub fn charmander() -> PokemonDetail {
    PokemonDetail {
        id: 4,
        name: "charmander".to_string(),
        types: vec!["fire".to_string()],
        abilities: vec![ability("blaze", false), ability("solar-power", true)],
        stats: vec![stat("hp", 39), stat("attack", 52), stat("speed", 65)],
        sprite: Some("https://sprites.example/4.png".to_string()),
        height: 6,
        weight: 85,
    }
}

pub fn charizard() -> PokemonDetail {
    PokemonDetail {
        id: 6,
        name: "charizard".to_string(),
        types: vec!["fire".to_string(), "flying".to_string()],
        abilities: vec![ability("blaze", false), ability("solar-power", true)],
        stats: vec![stat("hp", 78), stat("attack", 84), stat("speed", 100)],
        sprite: Some("https://sprites.example/6.png".to_string()),
        height: 17,
        weight: 905,
    }
}

pub fn squirtle() -> PokemonDetail {
    PokemonDetail {
        id: 7,
        name: "squirtle".to_string(),
        types: vec!["water".to_string()],
        abilities: vec![ability("torrent", false), ability("rain-dish", true)],
        stats: vec![stat("hp", 44), stat("attack", 48), stat("speed", 43)],
        sprite: None,
        height: 5,
        weight: 90,
    }
}

pub fn pikachu() -> PokemonDetail {
    PokemonDetail {
        id: 25,
        name: "pikachu".to_string(),
        types: vec!["electric".to_string()],
        abilities: vec![ability("static", false), ability("lightning-rod", true)],
        stats: vec![stat("hp", 35), stat("attack", 55), stat("speed", 90)],
        sprite: Some("https://sprites.example/25.png".to_string()),
        height: 4,
        weight: 60,
    }
}

/// First page of the list as the upstream would report it.
pub fn first_page() -> PokemonPage {
    PokemonPage {
        count: 1302,
        results: vec![
            PokemonSummary {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            },
            PokemonSummary {
                name: "ivysaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
            },
            PokemonSummary {
                name: "venusaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/3/".to_string(),
            },
        ],
    }
}
