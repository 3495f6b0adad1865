use crate::api::ApiFailure;
use common::model::consulta::ConsultaWithRelations;
use common::model::medico::Medico;
use common::model::paciente::Paciente;

pub enum Msg {
    MedicosLoaded(Vec<Medico>),
    PacientesLoaded(Vec<Paciente>),
    Loaded(ConsultaWithRelations),
    SetData(String),
    SetMedico(String),
    SetPaciente(String),
    Submit,
    Saved,
    Failed(ApiFailure),
}
