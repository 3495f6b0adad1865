use crate::app::Route;
use crate::helpers::{field_error, input_value, select_value};
use yew::prelude::*;

use super::messages::Msg;
use super::state::ConsultaForm;

pub fn view(form: &ConsultaForm, ctx: &Context<ConsultaForm>) -> Html {
    let link = ctx.link();
    let title = if ctx.props().id.is_some() { "Editar consulta" } else { "Nova consulta" };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit}>
            <h1>{ title }</h1>
            <div class="field">
                <label>{ "Data e hora" }</label>
                <input
                    type="datetime-local"
                    value={form.data.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetData(input_value(&e)))}
                />
                { field_error(&form.errors, "data") }
            </div>
            <div class="field">
                <label>{ "Médico" }</label>
                <select onchange={link.callback(|e: Event| Msg::SetMedico(select_value(&e)))}>
                    <option value="" selected={form.medico_id.is_empty()}>{ "Selecione um médico" }</option>
                    { for form.medicos.iter().map(|m| html! {
                        <option value={m.id.clone()} selected={m.id == form.medico_id}>
                            { format!("{} ({})", m.nome, m.especialidade) }
                        </option>
                    }) }
                </select>
                { field_error(&form.errors, "medicoId") }
            </div>
            <div class="field">
                <label>{ "Paciente" }</label>
                <select onchange={link.callback(|e: Event| Msg::SetPaciente(select_value(&e)))}>
                    <option value="" selected={form.paciente_id.is_empty()}>{ "Selecione um paciente" }</option>
                    { for form.pacientes.iter().map(|p| html! {
                        <option value={p.id.clone()} selected={p.id == form.paciente_id}>{ &p.nome }</option>
                    }) }
                </select>
                { field_error(&form.errors, "pacienteId") }
            </div>
            <div class="toolbar">
                <button type="submit" disabled={form.saving}>{ "Salvar" }</button>
                <button type="button" onclick={ctx.props().on_navigate.reform(|_| Route::Consultas)}>{ "Cancelar" }</button>
            </div>
        </form>
    }
}
