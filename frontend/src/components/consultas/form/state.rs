use common::datetime::from_datetime_local;
use common::model::medico::Medico;
use common::model::paciente::Paciente;
use common::requests::CreateConsulta;
use common::validation::FieldErrors;

/// State of the appointment form.
///
/// `data` holds the raw `datetime-local` value (`YYYY-MM-DDTHH:MM`); it is
/// converted to RFC 3339 UTC only when the payload is built.
pub struct ConsultaForm {
    pub medicos: Vec<Medico>,
    pub pacientes: Vec<Paciente>,
    pub data: String,
    pub medico_id: String,
    pub paciente_id: String,
    pub errors: FieldErrors,
    pub saving: bool,
}

impl ConsultaForm {
    pub fn new() -> Self {
        Self {
            medicos: Vec::new(),
            pacientes: Vec::new(),
            data: String::new(),
            medico_id: String::new(),
            paciente_id: String::new(),
            errors: FieldErrors::new(),
            saving: false,
        }
    }

    /// Unparseable or empty inputs become `None` so the shared rules report
    /// them as missing.
    pub fn payload(&self) -> CreateConsulta {
        let selected = |value: &str| {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        CreateConsulta {
            data: from_datetime_local(&self.data),
            medico_id: selected(&self.medico_id),
            paciente_id: selected(&self.paciente_id),
        }
    }
}
