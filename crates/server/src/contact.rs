//! Contact form: the message is handed to the visitor's mail client as a `mailto:` link.

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("Field '{field}' is required")));
            }
        }
        Ok(())
    }

    pub fn body(&self) -> String {
        format!("Hola, soy {}.\n\n{}\n\n¡Un saludo! 😊", self.name, self.message)
    }

    pub fn mailto(&self, address: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        )
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// matching JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
