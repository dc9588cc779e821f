use axum::{
    extract::Query,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};

use crate::config::Config;
use crate::contact::ContactForm;
use crate::error::AppError;

/// GET /contacto/enviar
/// Hands the message to the visitor's mail client through a `mailto:` redirect.
pub async fn send_message(
    Extension(config): Extension<Config>,
    Query(form): Query<ContactForm>,
) -> Result<Response, AppError> {
    form.validate()?;
    let location = HeaderValue::try_from(form.mailto(&config.contact_email))
        .map_err(|e| AppError::Internal(format!("Invalid contact address: {e}")))?;
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
