//! Patient pages: the searchable table and the create/edit form.

pub mod form;
pub mod list;
