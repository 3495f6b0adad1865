use crate::api::get_json;
use crate::app::Route;
use common::model::consulta::ConsultaWithRelations;
use common::model::medico::Medico;
use common::model::paciente::Paciente;
use gloo_console::error;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Medicos(usize),
    Pacientes(usize),
    Consultas(usize),
}

/// Landing page with the number of registered records per resource.
pub struct Dashboard {
    medicos: Option<usize>,
    pacientes: Option<usize>,
    consultas: Option<usize>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match get_json::<Vec<Medico>>("/medicos").await {
                Ok(list) => link.send_message(Msg::Medicos(list.len())),
                Err(err) => error!(format!("Erro ao carregar médicos: {}", err)),
            }
            match get_json::<Vec<Paciente>>("/pacientes").await {
                Ok(list) => link.send_message(Msg::Pacientes(list.len())),
                Err(err) => error!(format!("Erro ao carregar pacientes: {}", err)),
            }
            match get_json::<Vec<ConsultaWithRelations>>("/consultas").await {
                Ok(list) => link.send_message(Msg::Consultas(list.len())),
                Err(err) => error!(format!("Erro ao carregar consultas: {}", err)),
            }
        });

        Self {
            medicos: None,
            pacientes: None,
            consultas: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Medicos(n) => self.medicos = Some(n),
            Msg::Pacientes(n) => self.pacientes = Some(n),
            Msg::Consultas(n) => self.consultas = Some(n),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div>
                <h1>{ "Clínica" }</h1>
                <div class="cards">
                    { card("Médicos", self.medicos, on_navigate.reform(|_| Route::Medicos)) }
                    { card("Pacientes", self.pacientes, on_navigate.reform(|_| Route::Pacientes)) }
                    { card("Consultas", self.consultas, on_navigate.reform(|_| Route::Consultas)) }
                </div>
            </div>
        }
    }
}

fn card(title: &str, count: Option<usize>, onclick: Callback<MouseEvent>) -> Html {
    let count = match count {
        Some(n) => n.to_formatted_string(&Locale::pt),
        None => "…".to_string(),
    };
    html! {
        <div class="card" {onclick}>
            <div>{ title }</div>
            <div class="count">{ count }</div>
        </div>
    }
}
