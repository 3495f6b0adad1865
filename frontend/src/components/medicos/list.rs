use crate::api::{delete, get_json};
use crate::app::Route;
use crate::helpers::{confirm, input_value, show_toast};
use common::filter::filter_medicos;
use common::model::medico::Medico;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MedicoListProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Vec<Medico>),
    SetFilter(String),
    Delete(String),
    Deleted(String),
}

pub struct MedicoList {
    medicos: Vec<Medico>,
    filter: String,
    /// `medicos` after `filter`, recomputed whenever either changes.
    visible: Vec<Medico>,
}

impl MedicoList {
    fn refilter(&mut self) {
        self.visible = filter_medicos(&self.medicos, &self.filter);
    }
}

impl Component for MedicoList {
    type Message = Msg;
    type Properties = MedicoListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match get_json::<Vec<Medico>>("/medicos").await {
                Ok(medicos) => link.send_message(Msg::Loaded(medicos)),
                Err(err) => error!(format!("Erro ao buscar médicos: {}", err)),
            }
        });
        Self {
            medicos: Vec::new(),
            filter: String::new(),
            visible: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(medicos) => {
                self.medicos = medicos;
                self.refilter();
                true
            }
            Msg::SetFilter(filter) => {
                self.filter = filter;
                self.refilter();
                true
            }
            Msg::Delete(id) => {
                if !confirm("Tem certeza que deseja excluir este médico?") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match delete(&format!("/medicos/{}", id)).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => error!(format!("Erro ao excluir médico: {}", err)),
                    }
                });
                false
            }
            Msg::Deleted(id) => {
                self.medicos.retain(|m| m.id != id);
                self.refilter();
                show_toast("Médico excluído.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div>
                <h1>{ "Médicos" }</h1>
                <div class="toolbar">
                    <input
                        placeholder="Buscar por nome ou especialidade"
                        value={self.filter.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetFilter(input_value(&e)))}
                    />
                    <button onclick={on_navigate.reform(|_| Route::NewMedico)}>{ "Novo médico" }</button>
                </div>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Nome" }</th>
                            <th>{ "Email" }</th>
                            <th>{ "CRM" }</th>
                            <th>{ "Especialidade" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.visible.iter().map(|m| {
                            let edit_id = m.id.clone();
                            let delete_id = m.id.clone();
                            html! {
                                <tr key={m.id.clone()}>
                                    <td>{ &m.nome }</td>
                                    <td>{ &m.email }</td>
                                    <td>{ &m.crm }</td>
                                    <td>{ &m.especialidade }</td>
                                    <td>
                                        <button onclick={on_navigate.reform(move |_| Route::EditMedico(edit_id.clone()))}>{ "Editar" }</button>
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
