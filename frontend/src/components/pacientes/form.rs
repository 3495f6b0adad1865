use crate::api::{get_json, post_json, put_json, ApiFailure};
use crate::app::Route;
use crate::helpers::{alert, field_error, input_value, non_blank, show_toast};
use common::model::paciente::Paciente;
use common::requests::{CreatePaciente, UpdatePaciente};
use common::validation::FieldErrors;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PacienteFormProps {
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub id: Option<String>,
}

#[derive(Clone, Copy)]
pub enum Field {
    Nome,
    Email,
    Cpf,
    DataNascimento,
    Telefone,
}

pub enum Msg {
    Loaded(Paciente),
    Set(Field, String),
    Submit,
    Saved,
    Failed(ApiFailure),
}

#[derive(Default)]
pub struct PacienteForm {
    nome: String,
    email: String,
    cpf: String,
    /// `YYYY-MM-DD`, as the date input reports it.
    data_nascimento: String,
    telefone: String,
    errors: FieldErrors,
    saving: bool,
}

impl PacienteForm {
    fn payload(&self) -> CreatePaciente {
        CreatePaciente {
            nome: Some(self.nome.clone()),
            email: Some(self.email.clone()),
            cpf: Some(self.cpf.clone()),
            data_nascimento: non_blank(&self.data_nascimento),
            telefone: non_blank(&self.telefone),
        }
    }

    fn input(
        &self,
        ctx: &Context<Self>,
        label: &str,
        name: &str,
        kind: &'static str,
        field: Field,
        value: &str,
    ) -> Html {
        html! {
            <div class="field">
                <label>{ label }</label>
                <input
                    type={kind}
                    value={value.to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| Msg::Set(field, input_value(&e)))}
                />
                { field_error(&self.errors, name) }
            </div>
        }
    }
}

impl Component for PacienteForm {
    type Message = Msg;
    type Properties = PacienteFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(id) = ctx.props().id.clone() {
            let link = ctx.link().clone();
            spawn_local(async move {
                match get_json::<Paciente>(&format!("/pacientes/{}", id)).await {
                    Ok(paciente) => link.send_message(Msg::Loaded(paciente)),
                    Err(err) => error!(format!("Erro ao carregar paciente: {}", err)),
                }
            });
        }
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(paciente) => {
                self.nome = paciente.nome;
                self.email = paciente.email;
                self.cpf = paciente.cpf;
                // Full date-times keep only their calendar day.
                self.data_nascimento = paciente
                    .data_nascimento
                    .map(|d| d.chars().take(10).collect())
                    .unwrap_or_default();
                self.telefone = paciente.telefone.unwrap_or_default();
                true
            }
            Msg::Set(field, value) => {
                match field {
                    Field::Nome => self.nome = value,
                    Field::Email => self.email = value,
                    Field::Cpf => self.cpf = value,
                    Field::DataNascimento => self.data_nascimento = value,
                    Field::Telefone => self.telefone = value,
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
                            let changes = UpdatePaciente {
                                nome: payload.nome,
                                email: payload.email,
                                cpf: payload.cpf,
                                data_nascimento: payload.data_nascimento,
                                telefone: payload.telefone,
                            };
                            put_json::<_, Paciente>(&format!("/pacientes/{}", id), &changes).await
                        }
                        None => post_json::<_, Paciente>("/pacientes", &payload).await,
                    };
                    match result {
                        Ok(_) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::Failed(err)),
                    }
                });
                true
            }
            Msg::Saved => {
                show_toast("Paciente salvo.");
                ctx.props().on_navigate.emit(Route::Pacientes);
                false
            }
            Msg::Failed(err) => {
                self.saving = false;
                error!(format!("Erro ao salvar paciente: {}", err));
                if let Some(errors) = err.field_errors() {
                    self.errors = errors.clone();
                }
                alert("Ocorreu um erro ao salvar o paciente.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = if ctx.props().id.is_some() { "Editar paciente" } else { "Novo paciente" };
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <form {onsubmit}>
                <h1>{ title }</h1>
                { self.input(ctx, "Nome", "nome", "text", Field::Nome, &self.nome) }
                { self.input(ctx, "Email", "email", "email", Field::Email, &self.email) }
                { self.input(ctx, "CPF", "cpf", "text", Field::Cpf, &self.cpf) }
                { self.input(ctx, "Data de nascimento", "dataNascimento", "date", Field::DataNascimento, &self.data_nascimento) }
                { self.input(ctx, "Telefone", "telefone", "tel", Field::Telefone, &self.telefone) }
                <div class="toolbar">
                    <button type="submit" disabled={self.saving}>{ "Salvar" }</button>
                    <button type="button" onclick={ctx.props().on_navigate.reform(|_| Route::Pacientes)}>{ "Cancelar" }</button>
                </div>
            </form>
        }
    }
}
