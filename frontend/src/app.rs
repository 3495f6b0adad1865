use crate::components::consultas::form::ConsultaForm;
use crate::components::consultas::list::ConsultaList;
use crate::components::dashboard::Dashboard;
use crate::components::medicos::form::MedicoForm;
use crate::components::medicos::list::MedicoList;
use crate::components::pacientes::form::PacienteForm;
use crate::components::pacientes::list::PacienteList;
use yew::{html, Callback, Component, Context, Html};

/// Pages of the application. Edit variants carry the record id.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Dashboard,
    Medicos,
    NewMedico,
    EditMedico(String),
    Pacientes,
    NewPaciente,
    EditPaciente(String),
    Consultas,
    NewConsulta,
    EditConsulta(String),
}

impl Route {
    /// Navbar entry the page belongs to.
    fn section(&self) -> Route {
        match self {
            Route::Dashboard => Route::Dashboard,
            Route::Medicos | Route::NewMedico | Route::EditMedico(_) => Route::Medicos,
            Route::Pacientes | Route::NewPaciente | Route::EditPaciente(_) => Route::Pacientes,
            Route::Consultas | Route::NewConsulta | Route::EditConsulta(_) => Route::Consultas,
        }
    }
}

pub enum Msg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigate = ctx.link().callback(Msg::Navigate);
        // A new key per route remounts the page so it reloads its data.
        let key = format!("{:?}", self.route);
        html! {
            <>
                { self.navbar(&navigate) }
                <main {key}>{ self.page(navigate) }</main>
            </>
        }
    }
}

impl App {
    fn navbar(&self, navigate: &Callback<Route>) -> Html {
        let current = self.route.section();
        let entry = |label: &'static str, route: Route| {
            let class = if route == current { "active" } else { "" };
            let onclick = navigate.reform(move |_| route.clone());
            html! { <a {class} {onclick}>{ label }</a> }
        };
        html! {
            <nav>
                { entry("Clínica", Route::Dashboard) }
                { entry("Médicos", Route::Medicos) }
                { entry("Pacientes", Route::Pacientes) }
                { entry("Consultas", Route::Consultas) }
            </nav>
        }
    }

    fn page(&self, on_navigate: Callback<Route>) -> Html {
        match self.route.clone() {
            Route::Dashboard => html! { <Dashboard {on_navigate} /> },
            Route::Medicos => html! { <MedicoList {on_navigate} /> },
            Route::NewMedico => html! { <MedicoForm {on_navigate} /> },
            Route::EditMedico(id) => html! { <MedicoForm {on_navigate} id={Some(id)} /> },
            Route::Pacientes => html! { <PacienteList {on_navigate} /> },
            Route::NewPaciente => html! { <PacienteForm {on_navigate} /> },
            Route::EditPaciente(id) => html! { <PacienteForm {on_navigate} id={Some(id)} /> },
            Route::Consultas => html! { <ConsultaList {on_navigate} /> },
            Route::NewConsulta => html! { <ConsultaForm {on_navigate} /> },
            Route::EditConsulta(id) => html! { <ConsultaForm {on_navigate} id={Some(id)} /> },
        }
    }
}
