//! SQLite-backed favorites store.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::debug;

use super::{FavoriteRecord, FavoritesError, FavoritesStore, ToggleOutcome};
use crate::pokeapi::{PokemonAbility, PokemonDetail, PokemonStat};

/// SQLite-backed favorites store.
///
/// Sequence order of types/abilities/stats survives persistence through a
/// position column on each child table.
pub struct SqliteFavorites {
    conn: Mutex<Connection>,
}

impl SqliteFavorites {
    /// Open (or create) the favorites database at `path`.
    pub fn new(path: &Path) -> Result<Self, FavoritesError> {
        let conn = Connection::open(path).map_err(|e| FavoritesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory favorites store (useful for testing).
    pub fn in_memory() -> Result<Self, FavoritesError> {
        let conn =
            Connection::open_in_memory().map_err(|e| FavoritesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), FavoritesError> {
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            -- One row per favorited pokemon, keyed by upstream id
            CREATE TABLE IF NOT EXISTS favorites (
                pokemon_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                sprite TEXT,
                height INTEGER NOT NULL,
                weight INTEGER NOT NULL,
                is_favorite INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_favorites_name ON favorites(name);

            CREATE TABLE IF NOT EXISTS favorite_types (
                pokemon_id INTEGER NOT NULL REFERENCES favorites(pokemon_id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                PRIMARY KEY (pokemon_id, position)
            );

            CREATE TABLE IF NOT EXISTS favorite_abilities (
                pokemon_id INTEGER NOT NULL REFERENCES favorites(pokemon_id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                is_hidden INTEGER NOT NULL,
                PRIMARY KEY (pokemon_id, position)
            );

            CREATE INDEX IF NOT EXISTS idx_favorite_abilities_name ON favorite_abilities(name);

            CREATE TABLE IF NOT EXISTS favorite_stats (
                pokemon_id INTEGER NOT NULL REFERENCES favorites(pokemon_id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                value INTEGER NOT NULL,
                PRIMARY KEY (pokemon_id, position)
            );
            "#,
        )
        .map_err(|e| FavoritesError::Database(e.to_string()))?;

        Ok(())
    }

    fn load_types(conn: &Connection, pokemon_id: u32) -> Result<Vec<String>, FavoritesError> {
        let mut stmt = conn
            .prepare("SELECT name FROM favorite_types WHERE pokemon_id = ? ORDER BY position")
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![pokemon_id], |row| row.get(0))
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut types = Vec::new();
        for row in rows {
            types.push(row.map_err(|e| FavoritesError::Database(e.to_string()))?);
        }
        Ok(types)
    }

    fn load_abilities(
        conn: &Connection,
        pokemon_id: u32,
    ) -> Result<Vec<PokemonAbility>, FavoritesError> {
        let mut stmt = conn
            .prepare(
                "SELECT name, is_hidden FROM favorite_abilities
                 WHERE pokemon_id = ? ORDER BY position",
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![pokemon_id], |row| {
                Ok(PokemonAbility {
                    name: row.get(0)?,
                    is_hidden: row.get(1)?,
                })
            })
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut abilities = Vec::new();
        for row in rows {
            abilities.push(row.map_err(|e| FavoritesError::Database(e.to_string()))?);
        }
        Ok(abilities)
    }

    fn load_stats(conn: &Connection, pokemon_id: u32) -> Result<Vec<PokemonStat>, FavoritesError> {
        let mut stmt = conn
            .prepare(
                "SELECT name, value FROM favorite_stats WHERE pokemon_id = ? ORDER BY position",
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![pokemon_id], |row| {
                Ok(PokemonStat {
                    name: row.get(0)?,
                    value: row.get(1)?,
                })
            })
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row.map_err(|e| FavoritesError::Database(e.to_string()))?);
        }
        Ok(stats)
    }

    /// Convert a favorites row (without child sequences).
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<FavoriteRecord> {
        let created_at_str: String = row.get(6)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(FavoriteRecord {
            pokemon: PokemonDetail {
                id: row.get(0)?,
                name: row.get(1)?,
                types: Vec::new(),
                abilities: Vec::new(),
                stats: Vec::new(),
                sprite: row.get(2)?,
                height: row.get(3)?,
                weight: row.get(4)?,
            },
            is_favorite: row.get(5)?,
            created_at,
        })
    }

    fn load_records(
        conn: &Connection,
        where_clause: &str,
        args: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let sql = format!(
            "SELECT pokemon_id, name, sprite, height, weight, is_favorite, created_at
             FROM favorites {}",
            where_clause
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(args, Self::row_to_record)
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            let mut record = row.map_err(|e| FavoritesError::Database(e.to_string()))?;
            record.pokemon.types = Self::load_types(conn, record.pokemon.id)?;
            record.pokemon.abilities = Self::load_abilities(conn, record.pokemon.id)?;
            record.pokemon.stats = Self::load_stats(conn, record.pokemon.id)?;
            records.push(record);
        }
        Ok(records)
    }
}

impl FavoritesStore for SqliteFavorites {
    fn toggle(&self, detail: &PokemonDetail) -> Result<ToggleOutcome, FavoritesError> {
        let conn = self.conn.lock().unwrap();

        // Delete-or-insert in one transaction so the state transition is
        // atomic even if the connection is ever shared differently.
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let deleted = tx
            .execute(
                "DELETE FROM favorites WHERE pokemon_id = ?",
                params![detail.id],
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        if deleted > 0 {
            tx.commit()
                .map_err(|e| FavoritesError::Database(e.to_string()))?;
            debug!("favorite removed: id={}, name={}", detail.id, detail.name);
            return Ok(ToggleOutcome { added: false });
        }

        let now_str = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT INTO favorites (pokemon_id, name, sprite, height, weight, is_favorite, created_at)
             VALUES (?, ?, ?, ?, ?, 1, ?)",
            params![
                detail.id,
                &detail.name,
                &detail.sprite,
                detail.height,
                detail.weight,
                &now_str,
            ],
        )
        .map_err(|e| FavoritesError::Database(e.to_string()))?;

        for (position, name) in detail.types.iter().enumerate() {
            tx.execute(
                "INSERT INTO favorite_types (pokemon_id, position, name) VALUES (?, ?, ?)",
                params![detail.id, position as i64, name],
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;
        }

        for (position, ability) in detail.abilities.iter().enumerate() {
            tx.execute(
                "INSERT INTO favorite_abilities (pokemon_id, position, name, is_hidden)
                 VALUES (?, ?, ?, ?)",
                params![detail.id, position as i64, &ability.name, ability.is_hidden],
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;
        }

        for (position, stat) in detail.stats.iter().enumerate() {
            tx.execute(
                "INSERT INTO favorite_stats (pokemon_id, position, name, value)
                 VALUES (?, ?, ?, ?)",
                params![detail.id, position as i64, &stat.name, stat.value],
            )
            .map_err(|e| FavoritesError::Database(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        debug!("favorite added: id={}, name={}", detail.id, detail.name);
        Ok(ToggleOutcome { added: true })
    }

    fn list_all(&self) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let conn = self.conn.lock().unwrap();
        Self::load_records(&conn, "", &[])
    }

    fn search_by_name(&self, query: &str) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        if query.is_empty() {
            return self.list_all();
        }

        let conn = self.conn.lock().unwrap();
        let pattern = format!("%{}%", query);
        Self::load_records(&conn, "WHERE name LIKE ?", &[&pattern])
    }

    fn filter_by_ability(&self, ability: &str) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let conn = self.conn.lock().unwrap();
        Self::load_records(
            &conn,
            "WHERE pokemon_id IN (SELECT pokemon_id FROM favorite_abilities WHERE name = ?)",
            &[&ability],
        )
    }

    fn distinct_abilities(&self) -> Result<Vec<String>, FavoritesError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare("SELECT DISTINCT name FROM favorite_abilities ORDER BY name ASC")
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| FavoritesError::Database(e.to_string()))?;

        let mut abilities = Vec::new();
        for row in rows {
            abilities.push(row.map_err(|e| FavoritesError::Database(e.to_string()))?);
        }
        Ok(abilities)
    }

    fn is_favorite(&self, pokemon_id: u32) -> Result<bool, FavoritesError> {
        let conn = self.conn.lock().unwrap();

        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM favorites WHERE pokemon_id = ?",
                params![pokemon_id],
                |_| Ok(true),
            )
            .unwrap_or(false);

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn create_test_store() -> SqliteFavorites {
        SqliteFavorites::in_memory().unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let store = create_test_store();
        let detail = fixtures::bulbasaur();

        let outcome = store.toggle(&detail).unwrap();
        assert!(outcome.added);
        assert!(store.is_favorite(detail.id).unwrap());

        let outcome = store.toggle(&detail).unwrap();
        assert!(!outcome.added);
        assert!(!store.is_favorite(detail.id).unwrap());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let store = create_test_store();
        let detail = fixtures::bulbasaur();

        store.toggle(&detail).unwrap();
        store.toggle(&detail).unwrap();
        store.toggle(&detail).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].pokemon.id, detail.id);
    }

    #[test]
    fn test_record_round_trip_preserves_order() {
        let store = create_test_store();
        let detail = fixtures::bulbasaur();

        store.toggle(&detail).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        let record = &all[0];
        assert_eq!(record.pokemon, detail);
        assert!(record.is_favorite);
        assert_eq!(record.pokemon.types, vec!["grass", "poison"]);
        assert!(!record.pokemon.abilities[0].is_hidden);
        assert!(record.pokemon.abilities[1].is_hidden);
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let store = create_test_store();
        store.toggle(&fixtures::bulbasaur()).unwrap();
        store.toggle(&fixtures::charmander()).unwrap();
        store.toggle(&fixtures::squirtle()).unwrap();

        let results = store.search_by_name("").unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_substring_case_insensitive() {
        let store = create_test_store();
        store.toggle(&fixtures::charmander()).unwrap();
        store.toggle(&fixtures::charizard()).unwrap();
        store.toggle(&fixtures::squirtle()).unwrap();

        let results = store.search_by_name("char").unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.pokemon.name.as_str()).collect();
        assert_eq!(results.len(), 2);
        assert!(names.contains(&"charmander"));
        assert!(names.contains(&"charizard"));

        let results = store.search_by_name("CHAR").unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_no_match() {
        let store = create_test_store();
        store.toggle(&fixtures::squirtle()).unwrap();

        let results = store.search_by_name("char").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_filter_by_ability_exact_match_only() {
        let store = create_test_store();
        store.toggle(&fixtures::bulbasaur()).unwrap(); // overgrow
        let mut odd = fixtures::squirtle();
        odd.abilities[0].name = "overgrowth".to_string();
        store.toggle(&odd).unwrap();

        let results = store.filter_by_ability("overgrow").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].pokemon.name, "bulbasaur");
    }

    #[test]
    fn test_distinct_abilities_sorted_deduplicated() {
        let store = create_test_store();

        let mut pikachu = fixtures::pikachu();
        pikachu.abilities = vec![
            PokemonAbility {
                name: "static".to_string(),
                is_hidden: false,
            },
            PokemonAbility {
                name: "run-away".to_string(),
                is_hidden: true,
            },
        ];
        store.toggle(&pikachu).unwrap();

        let mut raichu = fixtures::pikachu();
        raichu.id = 26;
        raichu.name = "raichu".to_string();
        raichu.abilities = vec![PokemonAbility {
            name: "static".to_string(),
            is_hidden: false,
        }];
        store.toggle(&raichu).unwrap();

        let abilities = store.distinct_abilities().unwrap();
        assert_eq!(abilities, vec!["run-away", "static"]);
    }

    #[test]
    fn test_distinct_abilities_empty_store() {
        let store = create_test_store();
        assert!(store.distinct_abilities().unwrap().is_empty());
    }

    #[test]
    fn test_removing_favorite_drops_its_abilities_from_index() {
        let store = create_test_store();
        let bulbasaur = fixtures::bulbasaur();
        let pikachu = fixtures::pikachu();
        store.toggle(&bulbasaur).unwrap();
        store.toggle(&pikachu).unwrap();

        store.toggle(&bulbasaur).unwrap(); // remove

        let abilities = store.distinct_abilities().unwrap();
        assert_eq!(abilities, vec!["lightning-rod", "static"]);
    }

    #[test]
    fn test_on_disk_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.db");

        {
            let store = SqliteFavorites::new(&path).unwrap();
            store.toggle(&fixtures::bulbasaur()).unwrap();
        }

        let store = SqliteFavorites::new(&path).unwrap();
        assert!(store.is_favorite(1).unwrap());
        assert_eq!(store.list_all().unwrap().len(), 1);
    }
}
