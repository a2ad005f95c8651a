use std::error::Error;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use uuid::Uuid;

use super::errors::LookupError;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct Outcome<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a str>,
}

pub fn accepted(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(Outcome {
        success: true,
        message: Some(message),
        errors: None,
    })
}

pub fn rejected(status: StatusCode, errors: &str) -> HttpResponse {
    HttpResponse::build(status).json(Outcome {
        success: false,
        message: None,
        errors: Some(errors),
    })
}

pub fn missing(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(Outcome {
        success: false,
        message: Some(message),
        errors: None,
    })
}

/// Parses a path id; anything that is not a UUID names no stored record.
pub fn parse_record_id(raw: &str, record: &'static str) -> Result<Uuid, LookupError> {
    Uuid::parse_str(raw.trim()).map_err(|_| LookupError::NotFound(record))
}
