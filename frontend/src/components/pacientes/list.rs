use crate::api::{delete, get_json};
use crate::app::Route;
use crate::helpers::{confirm, input_value, show_toast};
use common::filter::filter_pacientes;
use common::model::paciente::Paciente;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PacienteListProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Vec<Paciente>),
    SetFilter(String),
    Delete(String),
    Deleted(String),
}

pub struct PacienteList {
    pacientes: Vec<Paciente>,
    filter: String,
    /// `pacientes` after `filter`, recomputed whenever either changes.
    visible: Vec<Paciente>,
}

impl PacienteList {
    fn refilter(&mut self) {
        self.visible = filter_pacientes(&self.pacientes, &self.filter);
    }
}

impl Component for PacienteList {
    type Message = Msg;
    type Properties = PacienteListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match get_json::<Vec<Paciente>>("/pacientes").await {
                Ok(pacientes) => link.send_message(Msg::Loaded(pacientes)),
                Err(err) => error!(format!("Erro ao buscar pacientes: {}", err)),
            }
        });
        Self {
            pacientes: Vec::new(),
            filter: String::new(),
            visible: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(pacientes) => {
                self.pacientes = pacientes;
                self.refilter();
                true
            }
            Msg::SetFilter(filter) => {
                self.filter = filter;
                self.refilter();
                true
            }
            Msg::Delete(id) => {
                if !confirm("Tem certeza que deseja excluir este paciente?") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match delete(&format!("/pacientes/{}", id)).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => error!(format!("Erro ao excluir paciente: {}", err)),
                    }
                });
                false
            }
            Msg::Deleted(id) => {
                self.pacientes.retain(|p| p.id != id);
                self.refilter();
                show_toast("Paciente excluído.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div>
                <h1>{ "Pacientes" }</h1>
                <div class="toolbar">
                    <input
                        placeholder="Buscar por nome ou CPF"
                        value={self.filter.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetFilter(input_value(&e)))}
                    />
                    <button onclick={on_navigate.reform(|_| Route::NewPaciente)}>{ "Novo paciente" }</button>
                </div>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Nome" }</th>
                            <th>{ "Email" }</th>
                            <th>{ "CPF" }</th>
                            <th>{ "Telefone" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.visible.iter().map(|p| {
                            let edit_id = p.id.clone();
                            let delete_id = p.id.clone();
                            html! {
                                <tr key={p.id.clone()}>
                                    <td>{ &p.nome }</td>
                                    <td>{ &p.email }</td>
                                    <td>{ &p.cpf }</td>
                                    <td>{ p.telefone.as_deref().unwrap_or("-") }</td>
                                    <td>
                                        <button onclick={on_navigate.reform(move |_| Route::EditPaciente(edit_id.clone()))}>{ "Editar" }</button>
                                        <button onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>{ "Excluir" }</button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
