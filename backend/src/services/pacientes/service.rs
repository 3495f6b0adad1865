//! Storage operations for patients. Input is assumed to be validated already.

use crate::db::{Database, DbError};
use common::model::paciente::Paciente;
use common::requests::{NewPaciente, UpdatePaciente};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const SELECT_COLUMNS: &str =
    "SELECT id, nome, email, cpf, data_nascimento, telefone FROM pacientes";

/// Maps six consecutive columns starting at `offset` into a [`Paciente`].
pub(crate) fn paciente_from_row(row: &Row, offset: usize) -> rusqlite::Result<Paciente> {
    Ok(Paciente {
        id: row.get(offset)?,
        nome: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
        cpf: row.get(offset + 3)?,
        data_nascimento: row.get(offset + 4)?,
        telefone: row.get(offset + 5)?,
    })
}

#[derive(Clone)]
pub struct PacienteService {
    db: Database,
}

impl PacienteService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewPaciente) -> Result<Paciente, DbError> {
        let paciente = Paciente {
            id: Uuid::new_v4().to_string(),
            nome: new.nome,
            email: new.email,
            cpf: new.cpf,
            data_nascimento: new.data_nascimento,
            telefone: new.telefone,
        };
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO pacientes (id, nome, email, cpf, data_nascimento, telefone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    &paciente.id,
                    &paciente.nome,
                    &paciente.email,
                    &paciente.cpf,
                    &paciente.data_nascimento,
                    &paciente.telefone
                ],
            )?;
            Ok(())
        })?;
        Ok(paciente)
    }

    pub fn find_all(&self) -> Result<Vec<Paciente>, DbError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY rowid", SELECT_COLUMNS))?;
            let pacientes = stmt
                .query_map([], |row| paciente_from_row(row, 0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(pacientes)
        })
    }

    pub fn find_one(&self, id: &str) -> Result<Option<Paciente>, DbError> {
        self.db.with_conn(|conn| {
            Ok(conn
                .query_row(
                    &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                    params![id],
                    |row| paciente_from_row(row, 0),
                )
                .optional()?)
        })
    }

    pub fn update(&self, id: &str, changes: UpdatePaciente) -> Result<Paciente, DbError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE pacientes SET
                    nome = COALESCE(?2, nome),
                    email = COALESCE(?3, email),
                    cpf = COALESCE(?4, cpf),
                    data_nascimento = COALESCE(?5, data_nascimento),
                    telefone = COALESCE(?6, telefone)
                 WHERE id = ?1",
                params![
                    id,
                    changes.nome,
                    changes.email,
                    changes.cpf,
                    changes.data_nascimento,
                    changes.telefone
                ],
            )?;
            if changed == 0 {
                return Err(DbError::NotFound);
            }
            Ok(conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                |row| paciente_from_row(row, 0),
            )?)
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), DbError> {
        self.db.with_conn(|conn| {
            match conn.execute("DELETE FROM pacientes WHERE id = ?1", params![id])? {
                0 => Err(DbError::NotFound),
                _ => Ok(()),
            }
        })
    }
}
