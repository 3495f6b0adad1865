//! Field-level validation shared by client and server.
//!
//! Payload structs in [`crate::requests`] declare their rules with
//! `validator` derive attributes. This module turns a failed run into a
//! [`FieldErrors`] map keyed by wire (camelCase) field names, and provides the
//! custom rules the derive attributes point at.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use validator::{validate_email, Validate, ValidationError, ValidationErrors};

/// Field name -> list of human readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

static ID_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

/// Runs the derived rules of `payload` and flattens any failure.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), FieldErrors> {
    payload.validate().map_err(|errors| flatten(&errors))
}

/// Converts `validator` output into the wire map.
pub fn flatten(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = out.entry(camel_case(&field.to_string())).or_default();
        for err in errs.iter() {
            messages.push(message_of(err));
        }
    }
    out
}

fn message_of(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("Valor inválido ({})", err.code),
    }
}

/// `medico_id` -> `medicoId`. Already camelCase input is returned unchanged.
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Accepts RFC 3339 date-times such as `2025-10-05T14:30:00.000Z`.
pub fn validate_datetime(value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| invalid("datetime", "Data e hora inválidas."))
}

/// Accepts a calendar date (`YYYY-MM-DD`) or a full RFC 3339 date-time.
pub fn validate_birth_date(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
    {
        Ok(())
    } else {
        Err(invalid("date", "Data de nascimento inválida."))
    }
}

/// RFC 5322 mailbox whose domain has at least one dot and an alphabetic
/// top-level label of two or more letters (`a@b` and `a@localhost` fail).
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    let dotted_domain = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });
    if dotted_domain && validate_email(value) {
        Ok(())
    } else {
        Err(invalid("email", "Formato de email inválido."))
    }
}

pub fn validate_medico_id(value: &str) -> Result<(), ValidationError> {
    if ID_SHAPE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("id", "Identificador de médico inválido."))
    }
}

pub fn validate_paciente_id(value: &str) -> Result<(), ValidationError> {
    if ID_SHAPE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("id", "Identificador de paciente inválido."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_converts_snake_names() {
        assert_eq!(camel_case("medico_id"), "medicoId");
        assert_eq!(camel_case("data_nascimento"), "dataNascimento");
        assert_eq!(camel_case("nome"), "nome");
        assert_eq!(camel_case("pacienteId"), "pacienteId");
    }

    #[test]
    fn datetime_rule_requires_rfc3339() {
        assert!(validate_datetime("2025-10-05T14:30:00.000Z").is_ok());
        assert!(validate_datetime("2025-10-05T11:30:00-03:00").is_ok());
        assert!(validate_datetime("2025-10-05").is_err());
        assert!(validate_datetime("amanhã").is_err());
    }

    #[test]
    fn birth_date_accepts_plain_dates() {
        assert!(validate_birth_date("1990-02-28").is_ok());
        assert!(validate_birth_date("1990-02-30").is_err());
        assert!(validate_birth_date("1990-02-28T00:00:00Z").is_ok());
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(validate_email_address("house@example.com").is_ok());
        assert!(validate_email_address("ana.silva@clinica.com.br").is_ok());
        assert!(validate_email_address("a@b").is_err());
        assert!(validate_email_address("a@localhost").is_err());
        assert!(validate_email_address("a@b.c").is_err());
        assert!(validate_email_address("a@.com").is_err());
        assert!(validate_email_address("not-an-email").is_err());
    }

    #[test]
    fn id_shape_rejects_whitespace_and_empty() {
        assert!(validate_medico_id("8c0f4f6e-2d7a-4b4e-9d8e-1f2a3b4c5d6e").is_ok());
        assert!(validate_medico_id("clxkyg36h000008l3b2n2f8e5").is_ok());
        assert!(validate_paciente_id("nonexistent").is_ok());
        assert!(validate_paciente_id("").is_err());
        assert!(validate_paciente_id("a b").is_err());
    }
}
