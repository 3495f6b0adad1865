//! Application state shared with every request handler.

use crate::db::Database;
use crate::services::consultas::service::ConsultaService;
use crate::services::medicos::service::MedicoService;
use crate::services::pacientes::service::PacienteService;

/// One service per resource, all backed by the same [`Database`].
///
/// Built once in `main` and registered as `web::Data<ClinicState>`.
#[derive(Clone)]
pub struct ClinicState {
    pub medicos: MedicoService,
    pub pacientes: PacienteService,
    pub consultas: ConsultaService,
}

impl ClinicState {
    pub fn new(db: Database) -> Self {
        Self {
            medicos: MedicoService::new(db.clone()),
            pacientes: PacienteService::new(db.clone()),
            consultas: ConsultaService::new(db),
        }
    }
}
