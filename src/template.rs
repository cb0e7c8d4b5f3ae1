//! `{key}` placeholder substitution for narrative templates.
//!
//! A placeholder is a brace-delimited run of ASCII letters, digits or underscores.
//! Substitution is a single left-to-right pass: inserted values are never rescanned,
//! and there is no escape syntax. Braces that do not form a placeholder are copied
//! through untouched.

use crate::error::CaseError;

fn is_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Iterate over the placeholder keys in `template`, in order of appearance.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    let mut rest = template;
    std::iter::from_fn(move || {
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) if is_key(&after[..end]) => {
                    rest = &after[end + 1..];
                    return Some(&after[..end]);
                }
                _ => rest = after,
            }
        }
        None
    })
}

/// Replace every `{key}` in `template` with its value from `vars`.
///
/// Fails with [`CaseError::MissingSubstitution`] on the first placeholder that has no
/// binding, so a literal `{placeholder}` never reaches the player.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, CaseError> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_key(&after[..end]) => {
                let key = &after[..end];
                let value = vars
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| CaseError::MissingSubstitution {
                        key: key.to_string(),
                    })?;
                out.push_str(value);
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
