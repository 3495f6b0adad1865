//! In-memory filtering behind the search boxes of the list views.

use crate::datetime::{parse_date_input, parse_rfc3339};
use crate::model::consulta::ConsultaWithRelations;
use crate::model::medico::Medico;
use crate::model::paciente::Paciente;
use chrono::NaiveDate;

/// Case-insensitive substring match against any of `fields`. An empty term matches everything.
pub fn matches_text(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

pub fn filter_medicos(medicos: &[Medico], term: &str) -> Vec<Medico> {
    medicos
        .iter()
        .filter(|m| matches_text(term, &[m.nome.as_str(), m.especialidade.as_str()]))
        .cloned()
        .collect()
}

pub fn filter_pacientes(pacientes: &[Paciente], term: &str) -> Vec<Paciente> {
    pacientes
        .iter()
        .filter(|p| matches_text(term, &[p.nome.as_str(), p.cpf.as_str()]))
        .cloned()
        .collect()
}

/// Inclusive calendar-day bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds the range from two `type="date"` inputs.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_date_input(start),
            end: parse_date_input(end),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}

/// Filters appointments by patient or doctor name and by day (UTC).
///
/// Rows whose date cannot be parsed are dropped once any bound is set.
pub fn filter_consultas(
    consultas: &[ConsultaWithRelations],
    term: &str,
    range: DateRange,
) -> Vec<ConsultaWithRelations> {
    consultas
        .iter()
        .filter(|c| {
            let in_range = if range == DateRange::default() {
                true
            } else {
                parse_rfc3339(&c.data).is_some_and(|dt| range.contains(dt.date_naive()))
            };
            in_range && matches_text(term, &[c.paciente.nome.as_str(), c.medico.nome.as_str()])
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paciente(id: &str, nome: &str, cpf: &str) -> Paciente {
        Paciente {
            id: id.into(),
            nome: nome.into(),
            email: format!("{id}@example.com"),
            cpf: cpf.into(),
            data_nascimento: None,
            telefone: None,
        }
    }

    fn medico(id: &str, nome: &str, especialidade: &str) -> Medico {
        Medico {
            id: id.into(),
            nome: nome.into(),
            email: format!("{id}@example.com"),
            crm: "123456".into(),
            especialidade: especialidade.into(),
        }
    }

    fn consulta(id: &str, data: &str, m: &Medico, p: &Paciente) -> ConsultaWithRelations {
        ConsultaWithRelations {
            id: id.into(),
            data: data.into(),
            medico_id: m.id.clone(),
            paciente_id: p.id.clone(),
            medico: m.clone(),
            paciente: p.clone(),
        }
    }

    #[test]
    fn patient_search_is_case_insensitive() {
        let list = vec![
            paciente("p1", "Ana Silva", "11111111111"),
            paciente("p2", "Bruno", "22222222222"),
        ];
        let names: Vec<_> = filter_pacientes(&list, "ana")
            .into_iter()
            .map(|p| p.nome)
            .collect();
        assert_eq!(names, vec!["Ana Silva"]);
    }

    #[test]
    fn patient_search_also_matches_cpf() {
        let list = vec![
            paciente("p1", "Ana Silva", "11111111111"),
            paciente("p2", "Bruno", "22222222222"),
        ];
        assert_eq!(filter_pacientes(&list, "2222").len(), 1);
        assert_eq!(filter_pacientes(&list, "").len(), 2);
    }

    #[test]
    fn doctor_search_matches_name_or_specialty() {
        let list = vec![
            medico("m1", "Dr. House", "Infectologia"),
            medico("m2", "Dra. Cuddy", "Endocrinologia"),
        ];
        assert_eq!(filter_medicos(&list, "HOUSE").len(), 1);
        assert_eq!(filter_medicos(&list, "logia").len(), 2);
        assert!(filter_medicos(&list, "cardio").is_empty());
    }

    #[test]
    fn appointments_filter_by_either_name_and_date_range() {
        let house = medico("m1", "Dr. House", "Infectologia");
        let ana = paciente("p1", "Ana Silva", "11111111111");
        let bruno = paciente("p2", "Bruno", "22222222222");
        let list = vec![
            consulta("c1", "2025-10-05T14:30:00.000Z", &house, &ana),
            consulta("c2", "2025-10-07T23:59:00.000Z", &house, &bruno),
            consulta("c3", "2025-10-09T08:00:00.000Z", &house, &bruno),
        ];

        assert_eq!(filter_consultas(&list, "house", DateRange::default()).len(), 3);
        assert_eq!(filter_consultas(&list, "bruno", DateRange::default()).len(), 2);

        let range = DateRange::from_inputs("2025-10-06", "2025-10-07");
        let ids: Vec<_> = filter_consultas(&list, "", range)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c2"]);

        let open_end = DateRange::from_inputs("2025-10-07", "");
        assert_eq!(filter_consultas(&list, "bruno", open_end).len(), 2);
    }
}
