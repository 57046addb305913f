//! Request template rendering.
//!
//! This module renders the environment-configured launch and kill templates against the
//! JSON object received in a request body. Rendering is deliberately simple key
//! substitution, not a general template language: a placeholder names a top-level key of
//! the request body and is replaced by that key's value, optionally passed through a
//! case filter. Any placeholder naming a key absent from the request body fails the
//! render outright so a half-filled provider request is never sent.

use serde_json::{Map, Value};

use crate::server::error::template::TemplateError;

/// Opening delimiter for a template placeholder.
const PLACEHOLDER_OPEN: &str = "{{";

/// Closing delimiter for a template placeholder.
const PLACEHOLDER_CLOSE: &str = "}}";

/// Renders a template against the JSON object from a request body.
///
/// Scans `template` for `{{key}}` placeholders and replaces each with the value of
/// `key` in `data`. A filter may follow the key, separated by a pipe:
/// `{{key | upper}}` or `{{key | lower}}` apply the corresponding case change to the
/// substituted text. Whitespace around the key and filter is ignored. Text outside
/// placeholders is copied through untouched.
///
/// String values substitute as their raw text (no surrounding quotes); all other JSON
/// values substitute as their JSON serialization, so numbers and booleans can fill
/// unquoted positions in the rendered request body.
///
/// # Arguments
/// - `template` - The template string sourced from configuration
/// - `data` - Top-level JSON object of the request body
///
/// # Returns
/// The rendered string, or a [`TemplateError`] when a placeholder is unclosed, names
/// no key, names a key missing from `data`, or uses an unknown filter.
///
/// # Example
/// ```ignore
/// let data = serde_json::from_str(r#"{"name": "worker-1"}"#).unwrap();
/// let body = render(r#"{"instance": "{{name | upper}}"}"#, &data).unwrap();
/// assert_eq!(body, r#"{"instance": "WORKER-1"}"#);
/// ```
pub fn render(template: &str, data: &Map<String, Value>) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
        rendered.push_str(&rest[..open]);

        let placeholder_at = offset + open;
        let after_open = &rest[open + PLACEHOLDER_OPEN.len()..];

        let close = after_open
            .find(PLACEHOLDER_CLOSE)
            .ok_or(TemplateError::UnclosedPlaceholder(placeholder_at))?;

        rendered.push_str(&substitute(&after_open[..close], placeholder_at, data)?);

        let consumed = open + PLACEHOLDER_OPEN.len() + close + PLACEHOLDER_CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    rendered.push_str(rest);

    Ok(rendered)
}

/// Resolves a single placeholder body (`key` or `key | filter`) to its substituted text.
fn substitute(
    placeholder: &str,
    placeholder_at: usize,
    data: &Map<String, Value>,
) -> Result<String, TemplateError> {
    let (key, filter) = match placeholder.split_once('|') {
        Some((key, filter)) => (key.trim(), Some(filter.trim())),
        None => (placeholder.trim(), None),
    };

    if key.is_empty() {
        return Err(TemplateError::EmptyKey(placeholder_at));
    }

    let value = data
        .get(key)
        .ok_or_else(|| TemplateError::MissingKey(key.to_string()))?;

    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    match filter {
        None => Ok(text),
        Some("upper") => Ok(text.to_uppercase()),
        Some("lower") => Ok(text.to_lowercase()),
        Some(unknown) => Err(TemplateError::UnknownFilter(unknown.to_string())),
    }
}
