use crate::api::{delete, get_json};
use crate::app::Route;
use crate::helpers::{confirm, input_value, show_toast};
use common::datetime::format_display;
use common::filter::{filter_consultas, DateRange};
use common::model::consulta::ConsultaWithRelations;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConsultaListProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Vec<ConsultaWithRelations>),
    SetFilter(String),
    SetStart(String),
    SetEnd(String),
    ClearDates,
    Delete(String),
    Deleted(String),
}

pub struct ConsultaList {
    consultas: Vec<ConsultaWithRelations>,
    filter: String,
    start: String,
    end: String,
    visible: Vec<ConsultaWithRelations>,
}

impl ConsultaList {
    fn refilter(&mut self) {
        let range = DateRange::from_inputs(&self.start, &self.end);
        self.visible = filter_consultas(&self.consultas, &self.filter, range);
    }
}

impl Component for ConsultaList {
    type Message = Msg;
    type Properties = ConsultaListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match get_json::<Vec<ConsultaWithRelations>>("/consultas").await {
                Ok(consultas) => link.send_message(Msg::Loaded(consultas)),
                Err(err) => error!(format!("Erro ao buscar consultas: {}", err)),
            }
        });
        Self {
            consultas: Vec::new(),
            filter: String::new(),
            start: String::new(),
            end: String::new(),
            visible: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(consultas) => self.consultas = consultas,
            Msg::SetFilter(filter) => self.filter = filter,
            Msg::SetStart(start) => self.start = start,
            Msg::SetEnd(end) => self.end = end,
            Msg::ClearDates => {
                self.start.clear();
                self.end.clear();
            }
            Msg::Delete(id) => {
                if !confirm("Tem certeza que deseja excluir esta consulta?") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match delete(&format!("/consultas/{}", id)).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => error!(format!("Erro ao excluir consulta: {}", err)),
                    }
                });
                return false;
            }
            Msg::Deleted(id) => {
                self.consultas.retain(|c| c.id != id);
                show_toast("Consulta excluída.");
            }
        }
        self.refilter();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div>
                <h1>{ "Consultas" }</h1>
                <div class="toolbar">
                    <input
                        placeholder="Buscar por paciente ou médico"
                        value={self.filter.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetFilter(input_value(&e)))}
                    />
                    <label>{ "De" }</label>
                    <input
                        type="date"
                        value={self.start.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetStart(input_value(&e)))}
                    />
                    <label>{ "Até" }</label>
                    <input
                        type="date"
                        value={self.end.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetEnd(input_value(&e)))}
                    />
                    <button onclick={link.callback(|_| Msg::ClearDates)}>{ "Limpar datas" }</button>
                    <button onclick={on_navigate.reform(|_| Route::NewConsulta)}>{ "Nova consulta" }</button>
                </div>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Data" }</th>
                            <th>{ "Paciente" }</th>
                            <th>{ "Médico" }</th>
                            <th>{ "Especialidade" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.visible.iter().map(|c| {
                            let edit_id = c.id.clone();
                            let delete_id = c.id.clone();
                            html! {
                                <tr key={c.id.clone()}>
                                    <td>{ format_display(&c.data) }</td>
                                    <td>{ &c.paciente.nome }</td>
                                    <td>{ &c.medico.nome }</td>
                                    <td>{ &c.medico.especialidade }</td>
                                    <td>
                                        <button onclick={on_navigate.reform(move |_| Route::EditConsulta(edit_id.clone()))}>{ "Editar" }</button>
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
