//! Storage operations for doctors. Input is assumed to be validated already.

use crate::db::{Database, DbError};
use common::model::medico::Medico;
use common::requests::{NewMedico, UpdateMedico};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, nome, email, crm, especialidade FROM medicos";

/// Maps five consecutive columns starting at `offset` into a [`Medico`].
pub(crate) fn medico_from_row(row: &Row, offset: usize) -> rusqlite::Result<Medico> {
    Ok(Medico {
        id: row.get(offset)?,
        nome: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
        crm: row.get(offset + 3)?,
        especialidade: row.get(offset + 4)?,
    })
}

#[derive(Clone)]
pub struct MedicoService {
    db: Database,
}

impl MedicoService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewMedico) -> Result<Medico, DbError> {
        let medico = Medico {
            id: Uuid::new_v4().to_string(),
            nome: new.nome,
            email: new.email,
            crm: new.crm,
            especialidade: new.especialidade,
        };
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO medicos (id, nome, email, crm, especialidade) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    &medico.id,
                    &medico.nome,
                    &medico.email,
                    &medico.crm,
                    &medico.especialidade
                ],
            )?;
            Ok(())
        })?;
        Ok(medico)
    }

    /// All doctors in creation order.
    pub fn find_all(&self) -> Result<Vec<Medico>, DbError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY rowid", SELECT_COLUMNS))?;
            let medicos = stmt
                .query_map([], |row| medico_from_row(row, 0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(medicos)
        })
    }

    /// `Ok(None)` when no doctor has this id.
    pub fn find_one(&self, id: &str) -> Result<Option<Medico>, DbError> {
        self.db.with_conn(|conn| {
            Ok(conn
                .query_row(
                    &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                    params![id],
                    |row| medico_from_row(row, 0),
                )
                .optional()?)
        })
    }

    /// Applies the supplied fields only. Fails with [`DbError::NotFound`] for an unknown id.
    pub fn update(&self, id: &str, changes: UpdateMedico) -> Result<Medico, DbError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE medicos SET
                    nome = COALESCE(?2, nome),
                    email = COALESCE(?3, email),
                    crm = COALESCE(?4, crm),
                    especialidade = COALESCE(?5, especialidade)
                 WHERE id = ?1",
                params![
                    id,
                    changes.nome,
                    changes.email,
                    changes.crm,
                    changes.especialidade
                ],
            )?;
            if changed == 0 {
                return Err(DbError::NotFound);
            }
            Ok(conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                |row| medico_from_row(row, 0),
            )?)
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), DbError> {
        self.db.with_conn(|conn| {
            match conn.execute("DELETE FROM medicos WHERE id = ?1", params![id])? {
                0 => Err(DbError::NotFound),
                _ => Ok(()),
            }
        })
    }
}
