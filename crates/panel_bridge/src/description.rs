//! Description output channel.
//!
//! Edited rich-text content travels to the host through a hidden field,
//! prefixed with a causality pseudo-tag so the host can tell a genuine save
//! from a redundant identical payload.

use crate::dom::ElementAccess;
use crate::signal::{self, DESCRIPTION_OUTPUT_FIELD};
use crate::token::fresh_token;

const TOKEN_OPEN: &str = "<[[token=\"";
const TOKEN_CLOSE: &str = "\"]]>";

/// Prefixes `content` with a fresh `<[[token="<uuid>"]]>` pseudo-tag.
pub fn wrap_with_token(content: &str) -> String {
    format!("{TOKEN_OPEN}{}{TOKEN_CLOSE}{content}", fresh_token())
}

/// Removes the first causality pseudo-tag, if present. Content pushed back
/// by the host still carries the tag from the previous save.
pub fn strip_token(content: &str) -> String {
    let Some(start) = content.find(TOKEN_OPEN) else {
        return content.to_string();
    };
    let Some(close) = content[start + TOKEN_OPEN.len()..].find(TOKEN_CLOSE) else {
        return content.to_string();
    };
    let end = start + TOKEN_OPEN.len() + close + TOKEN_CLOSE.len();
    let mut stripped = String::with_capacity(content.len());
    stripped.push_str(&content[..start]);
    stripped.push_str(&content[end..]);
    stripped
}

/// Publishes edited description content to the host, token first.
pub fn publish_description(dom: &mut dyn ElementAccess, content: &str) -> bool {
    signal::deliver(dom, DESCRIPTION_OUTPUT_FIELD, &wrap_with_token(content))
}
