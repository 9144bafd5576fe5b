//! DDL for the two tables. There is no migration history: the schema is either
//! present in full or dropped in full.

pub(crate) const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

pub(crate) const CREATE_PLANETS: &str = r#"
    CREATE TABLE IF NOT EXISTS planets (
        planet_id INTEGER PRIMARY KEY AUTOINCREMENT,
        planet_name TEXT NOT NULL,
        planet_type TEXT NOT NULL,
        home_star TEXT NOT NULL,
        mass REAL NOT NULL,
        radius REAL NOT NULL,
        distance REAL NOT NULL
    )
"#;

pub(crate) const DROP_USERS: &str = "DROP TABLE IF EXISTS users";
pub(crate) const DROP_PLANETS: &str = "DROP TABLE IF EXISTS planets";
