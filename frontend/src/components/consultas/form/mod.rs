//! Appointment form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! On creation the component loads the doctor and patient lists for its
//! selects and, in edit mode, the appointment being edited.

use crate::api::get_json;
use common::model::consulta::ConsultaWithRelations;
use common::model::medico::Medico;
use common::model::paciente::Paciente;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ConsultaFormProps;
pub use state::ConsultaForm;

impl Component for ConsultaForm {
    type Message = Msg;
    type Properties = ConsultaFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let id = ctx.props().id.clone();
        spawn_local(async move {
            match get_json::<Vec<Medico>>("/medicos").await {
                Ok(medicos) => link.send_message(Msg::MedicosLoaded(medicos)),
                Err(err) => error!(format!("Erro ao buscar médicos: {}", err)),
            }
            match get_json::<Vec<Paciente>>("/pacientes").await {
                Ok(pacientes) => link.send_message(Msg::PacientesLoaded(pacientes)),
                Err(err) => error!(format!("Erro ao buscar pacientes: {}", err)),
            }
            if let Some(id) = id {
                match get_json::<ConsultaWithRelations>(&format!("/consultas/{}", id)).await {
                    Ok(consulta) => link.send_message(Msg::Loaded(consulta)),
                    Err(err) => error!(format!("Erro ao carregar consulta: {}", err)),
                }
            }
        });
        ConsultaForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
