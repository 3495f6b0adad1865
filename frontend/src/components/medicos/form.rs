use crate::api::{get_json, post_json, put_json, ApiFailure};
use crate::app::Route;
use crate::helpers::{alert, field_error, input_value, show_toast};
use common::model::medico::Medico;
use common::requests::{CreateMedico, UpdateMedico};
use common::validation::FieldErrors;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MedicoFormProps {
    pub on_navigate: Callback<Route>,
    /// Record to edit; `None` creates a new doctor.
    #[prop_or_default]
    pub id: Option<String>,
}

#[derive(Clone, Copy)]
pub enum Field {
    Nome,
    Email,
    Crm,
    Especialidade,
}

pub enum Msg {
    Loaded(Medico),
    Set(Field, String),
    Submit,
    Saved,
    Failed(ApiFailure),
}

#[derive(Default)]
pub struct MedicoForm {
    nome: String,
    email: String,
    crm: String,
    especialidade: String,
    errors: FieldErrors,
    saving: bool,
}

impl MedicoForm {
    fn payload(&self) -> CreateMedico {
        CreateMedico {
            nome: Some(self.nome.clone()),
            email: Some(self.email.clone()),
            crm: Some(self.crm.clone()),
            especialidade: Some(self.especialidade.clone()),
        }
    }

    fn input(&self, ctx: &Context<Self>, label: &str, name: &str, field: Field, value: &str) -> Html {
        html! {
            <div class="field">
                <label>{ label }</label>
                <input
                    value={value.to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| Msg::Set(field, input_value(&e)))}
                />
                { field_error(&self.errors, name) }
            </div>
        }
    }
}

impl Component for MedicoForm {
    type Message = Msg;
    type Properties = MedicoFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(id) = ctx.props().id.clone() {
            let link = ctx.link().clone();
            spawn_local(async move {
                match get_json::<Medico>(&format!("/medicos/{}", id)).await {
                    Ok(medico) => link.send_message(Msg::Loaded(medico)),
                    Err(err) => error!(format!("Erro ao carregar médico: {}", err)),
                }
            });
        }
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(medico) => {
                self.nome = medico.nome;
                self.email = medico.email;
                self.crm = medico.crm;
                self.especialidade = medico.especialidade;
                true
            }
            Msg::Set(field, value) => {
                match field {
                    Field::Nome => self.nome = value,
                    Field::Email => self.email = value,
                    Field::Crm => self.crm = value,
                    Field::Especialidade => self.especialidade = value,
                }
                true
            }
            Msg::Submit => {
                let payload = self.payload();
                if let Err(errors) = payload.clone().validated() {
                    self.errors = errors;
                    return true;
                }
                self.errors.clear();
                self.saving = true;

                let link = ctx.link().clone();
                let id = ctx.props().id.clone();
                spawn_local(async move {
                    let result = match id {
                        Some(id) => {
                            let changes = UpdateMedico {
                                nome: payload.nome,
                                email: payload.email,
                                crm: payload.crm,
                                especialidade: payload.especialidade,
                            };
                            put_json::<_, Medico>(&format!("/medicos/{}", id), &changes).await
                        }
                        None => post_json::<_, Medico>("/medicos", &payload).await,
                    };
                    match result {
                        Ok(_) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::Failed(err)),
                    }
                });
                true
            }
            Msg::Saved => {
                show_toast("Médico salvo.");
                ctx.props().on_navigate.emit(Route::Medicos);
                false
            }
            Msg::Failed(err) => {
                self.saving = false;
                error!(format!("Erro ao salvar médico: {}", err));
                if let Some(errors) = err.field_errors() {
                    self.errors = errors.clone();
                }
                alert("Ocorreu um erro ao salvar o médico.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = if ctx.props().id.is_some() { "Editar médico" } else { "Novo médico" };
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <form {onsubmit}>
                <h1>{ title }</h1>
                { self.input(ctx, "Nome", "nome", Field::Nome, &self.nome) }
                { self.input(ctx, "Email", "email", Field::Email, &self.email) }
                { self.input(ctx, "CRM", "crm", Field::Crm, &self.crm) }
                { self.input(ctx, "Especialidade", "especialidade", Field::Especialidade, &self.especialidade) }
                <div class="toolbar">
                    <button type="submit" disabled={self.saving}>{ "Salvar" }</button>
                    <button type="button" onclick={ctx.props().on_navigate.reform(|_| Route::Medicos)}>{ "Cancelar" }</button>
                </div>
            </form>
        }
    }
}
