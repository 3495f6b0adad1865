//! Update function for the appointment form.
//!
//! Submission validates with the shared `CreateConsulta` rules first; only a
//! clean payload is sent, as `POST /consultas` or `PUT /consultas/{id}`.

use crate::api::{post_json, put_json};
use crate::app::Route;
use crate::helpers::{alert, show_toast};
use common::datetime::to_datetime_local;
use common::model::consulta::Consulta;
use common::requests::UpdateConsulta;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ConsultaForm;

pub fn update(form: &mut ConsultaForm, ctx: &Context<ConsultaForm>, msg: Msg) -> bool {
    match msg {
        Msg::MedicosLoaded(medicos) => {
            form.medicos = medicos;
            true
        }
        Msg::PacientesLoaded(pacientes) => {
            form.pacientes = pacientes;
            true
        }
        Msg::Loaded(consulta) => {
            form.data = to_datetime_local(&consulta.data);
            form.medico_id = consulta.medico_id;
            form.paciente_id = consulta.paciente_id;
            true
        }
        Msg::SetData(value) => {
            form.data = value;
            true
        }
        Msg::SetMedico(value) => {
            form.medico_id = value;
            true
        }
        Msg::SetPaciente(value) => {
            form.paciente_id = value;
            true
        }
        Msg::Submit => {
            let payload = form.payload();
            if let Err(errors) = payload.clone().validated() {
                form.errors = errors;
                return true;
            }
            form.errors.clear();
            form.saving = true;

            let link = ctx.link().clone();
            let id = ctx.props().id.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => {
                        let changes = UpdateConsulta {
                            data: payload.data,
                            medico_id: payload.medico_id,
                            paciente_id: payload.paciente_id,
                        };
                        put_json::<_, Consulta>(&format!("/consultas/{}", id), &changes).await
                    }
                    None => post_json::<_, Consulta>("/consultas", &payload).await,
                };
                match result {
                    Ok(_) => link.send_message(Msg::Saved),
                    Err(err) => link.send_message(Msg::Failed(err)),
                }
            });
            true
        }
        Msg::Saved => {
            show_toast("Consulta salva.");
            ctx.props().on_navigate.emit(Route::Consultas);
            false
        }
        Msg::Failed(err) => {
            form.saving = false;
            error!(format!("Erro ao salvar consulta: {}", err));
            if let Some(errors) = err.field_errors() {
                form.errors = errors.clone();
            }
            alert("Ocorreu um erro ao salvar a consulta.");
            true
        }
    }
}
