//! SQLite persistence for medicos, pacientes and consultas.
//!
//! A single [`Database`] handle is opened by `main` and cloned into every
//! service. rusqlite connections are synchronous, so callers run their closures
//! on actix's blocking pool (see `services::run_blocking`).

mod error;

pub use error::DbError;

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Idempotent schema. Uniqueness and references are enforced here, not in the services.
const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS medicos (
    id            TEXT PRIMARY KEY NOT NULL,
    nome          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    crm           TEXT NOT NULL UNIQUE,
    especialidade TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS pacientes (
    id              TEXT PRIMARY KEY NOT NULL,
    nome            TEXT NOT NULL,
    email           TEXT NOT NULL UNIQUE,
    cpf             TEXT NOT NULL UNIQUE,
    data_nascimento TEXT,
    telefone        TEXT
);

CREATE TABLE IF NOT EXISTS consultas (
    id          TEXT PRIMARY KEY NOT NULL,
    data        TEXT NOT NULL,
    medico_id   TEXT NOT NULL REFERENCES medicos (id),
    paciente_id TEXT NOT NULL REFERENCES pacientes (id)
);

CREATE INDEX IF NOT EXISTS consultas_medico_id ON consultas (medico_id);
CREATE INDEX IF NOT EXISTS consultas_paciente_id ON consultas (paciente_id);
";

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, DbError>,
    ) -> Result<T, DbError> {
        let conn = self.conn.lock().map_err(|_| DbError::Poisoned)?;
        f(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    fn insert_medico(conn: &Connection, id: &str, email: &str, crm: &str) -> Result<(), DbError> {
        conn.execute(
            "INSERT INTO medicos (id, nome, email, crm, especialidade) VALUES (?1, 'Dr. X', ?2, ?3, 'Clínica')",
            params![id, email, crm],
        )?;
        Ok(())
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .with_conn(|conn| Ok(conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn classifies_unique_violations() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| insert_medico(conn, "m1", "a@x.com", "111111"))
            .unwrap();

        let same_email = db.with_conn(|conn| insert_medico(conn, "m2", "a@x.com", "222222"));
        assert!(matches!(same_email, Err(DbError::UniqueViolation(_))));

        let same_id = db.with_conn(|conn| insert_medico(conn, "m1", "b@x.com", "333333"));
        assert!(matches!(same_id, Err(DbError::UniqueViolation(_))));
    }

    #[test]
    fn classifies_foreign_key_violations() {
        let db = Database::open_in_memory().unwrap();
        let result = db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO consultas (id, data, medico_id, paciente_id) VALUES ('c1', '2025-10-05T14:30:00.000Z', 'ghost', 'ghost')",
                [],
            )?;
            Ok(())
        });
        assert!(matches!(result, Err(DbError::ForeignKeyViolation(_))));
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let db = Database::open_in_memory().unwrap();
        let result: Result<String, DbError> = db.with_conn(|conn| {
            Ok(conn.query_row("SELECT id FROM medicos WHERE id = 'nope'", [], |row| row.get(0))?)
        });
        assert!(matches!(result, Err(DbError::NotFound)));
    }

    #[test]
    fn file_database_keeps_rows_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinica.sqlite");

        let db = Database::open(&path).unwrap();
        db.with_conn(|conn| insert_medico(conn, "m1", "a@x.com", "111111"))
            .unwrap();
        drop(db);

        let reopened = Database::open(&path).unwrap();
        let count: i64 = reopened
            .with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM medicos", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(count, 1);
    }
}
