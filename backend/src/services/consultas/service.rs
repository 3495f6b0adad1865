//! Storage operations for appointments.
//!
//! Reads join `medicos` and `pacientes` in the same statement so each row comes
//! back with both records embedded. References are checked by SQLite's foreign
//! keys; a bad `medico_id`/`paciente_id` surfaces as
//! [`DbError::ForeignKeyViolation`].

use crate::db::{Database, DbError};
use crate::services::medicos::service::medico_from_row;
use crate::services::pacientes::service::paciente_from_row;
use common::model::consulta::{Consulta, ConsultaWithRelations};
use common::requests::{NewConsulta, UpdateConsulta};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const SELECT_WITH_RELATIONS: &str = "
    SELECT c.id, c.data, c.medico_id, c.paciente_id,
           m.id, m.nome, m.email, m.crm, m.especialidade,
           p.id, p.nome, p.email, p.cpf, p.data_nascimento, p.telefone
      FROM consultas c
      JOIN medicos m ON m.id = c.medico_id
      JOIN pacientes p ON p.id = c.paciente_id";

fn consulta_with_relations_from_row(row: &Row) -> rusqlite::Result<ConsultaWithRelations> {
    Ok(ConsultaWithRelations {
        id: row.get(0)?,
        data: row.get(1)?,
        medico_id: row.get(2)?,
        paciente_id: row.get(3)?,
        medico: medico_from_row(row, 4)?,
        paciente: paciente_from_row(row, 9)?,
    })
}

#[derive(Clone)]
pub struct ConsultaService {
    db: Database,
}

impl ConsultaService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn create(&self, new: NewConsulta) -> Result<Consulta, DbError> {
        let consulta = Consulta {
            id: Uuid::new_v4().to_string(),
            data: new.data,
            medico_id: new.medico_id,
            paciente_id: new.paciente_id,
        };
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO consultas (id, data, medico_id, paciente_id) VALUES (?1, ?2, ?3, ?4)",
                params![
                    &consulta.id,
                    &consulta.data,
                    &consulta.medico_id,
                    &consulta.paciente_id
                ],
            )?;
            Ok(())
        })?;
        Ok(consulta)
    }

    /// Every appointment with its doctor and patient, earliest first.
    pub fn find_all(&self) -> Result<Vec<ConsultaWithRelations>, DbError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "{} ORDER BY c.data, c.rowid",
                SELECT_WITH_RELATIONS
            ))?;
            let consultas = stmt
                .query_map([], consulta_with_relations_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(consultas)
        })
    }

    pub fn find_one(&self, id: &str) -> Result<Option<ConsultaWithRelations>, DbError> {
        self.db.with_conn(|conn| {
            Ok(conn
                .query_row(
                    &format!("{} WHERE c.id = ?1", SELECT_WITH_RELATIONS),
                    params![id],
                    consulta_with_relations_from_row,
                )
                .optional()?)
        })
    }

    pub fn update(&self, id: &str, changes: UpdateConsulta) -> Result<Consulta, DbError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE consultas SET
                    data = COALESCE(?2, data),
                    medico_id = COALESCE(?3, medico_id),
                    paciente_id = COALESCE(?4, paciente_id)
                 WHERE id = ?1",
                params![id, changes.data, changes.medico_id, changes.paciente_id],
            )?;
            if changed == 0 {
                return Err(DbError::NotFound);
            }
            Ok(conn.query_row(
                "SELECT id, data, medico_id, paciente_id FROM consultas WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Consulta {
                        id: row.get(0)?,
                        data: row.get(1)?,
                        medico_id: row.get(2)?,
                        paciente_id: row.get(3)?,
                    })
                },
            )?)
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), DbError> {
        self.db.with_conn(|conn| {
            match conn.execute("DELETE FROM consultas WHERE id = ?1", params![id])? {
                0 => Err(DbError::NotFound),
                _ => Ok(()),
            }
        })
    }
}
