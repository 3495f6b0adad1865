use crate::app::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConsultaFormProps {
    pub on_navigate: Callback<Route>,
    /// Appointment to edit. When `None` the form creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}
