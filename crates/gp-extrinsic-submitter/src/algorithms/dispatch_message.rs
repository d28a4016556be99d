//! # Failure Messages
//!
//! Turns dispatch errors and transport rejections into user-facing text.

use crate::domain::{DispatchError, TransportError};

/// Describe an `ExtrinsicFailed` dispatch error.
///
/// - Module: `"{section}.{method} : {docs}"`
/// - Token: `"Token.{kind}"`
/// - Other: the type name, else `fallback`
pub fn describe_failure(error: Option<&DispatchError>, fallback: &str) -> String {
    match error {
        Some(DispatchError::Module(module)) => format!(
            "{}.{} : {}",
            module.section,
            module.method,
            module.docs.join(" ")
        ),
        Some(err @ DispatchError::Token(kind)) => {
            format!("{}.{}", err.type_name().unwrap_or("Token"), kind.name())
        }
        Some(DispatchError::Other { type_name }) => match type_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => fallback.to_string(),
        },
        None => fallback.to_string(),
    }
}

/// Describe a transport rejection; empty messages fall back.
pub fn describe_rejection(error: &TransportError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
