//! Single-pass substitution over a template body.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but no binding was supplied for it.
    #[error("unresolved placeholder '{name}' at byte {position} in template")]
    UnresolvedPlaceholder {
        /// The name of the unresolved placeholder.
        name: String,
        /// The byte offset of the opening `{` in the template.
        position: usize,
    },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at byte {position} in template")]
    UnmatchedBrace {
        /// The byte offset of the unmatched `{`.
        position: usize,
    },

    /// An empty placeholder (`{}`) was found.
    #[error("empty placeholder '{{}}' at byte {position} in template")]
    EmptyPlaceholder {
        /// The byte offset of the empty placeholder.
        position: usize,
    },
}

/// Render a template body by substituting placeholders.
///
/// Substituted values are inserted verbatim and are not re-scanned, so braces
/// inside bound values (or inside an already-rendered deployment block passed
/// through as a value) never trigger another substitution pass. Bindings that
/// no placeholder references are not an error.
///
/// Deterministic: the same (template, bindings) pair always yields
/// byte-identical output.
pub fn render(
    template: &str,
    bindings: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                // Check for escape sequence {{
                if let Some((_, '{')) = chars.peek() {
                    chars.next(); // consume the second {
                    result.push('{');
                } else {
                    // Parse placeholder name
                    let start_pos = pos;
                    let mut name = String::new();

                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => {
                                return Err(TemplateError::UnmatchedBrace {
                                    position: start_pos,
                                });
                            }
                        }
                    }

                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder {
                            position: start_pos,
                        });
                    }

                    // Trim whitespace from the name for flexibility
                    let name = name.trim();

                    match bindings.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            return Err(TemplateError::UnresolvedPlaceholder {
                                name: name.to_string(),
                                position: start_pos,
                            });
                        }
                    }
                }
            }
            '}' => {
                // Check for escape sequence }}
                if let Some((_, '}')) = chars.peek() {
                    chars.next(); // consume the second }
                    result.push('}');
                } else {
                    // Lone } is just a regular character
                    result.push('}');
                }
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Helper to create a bindings map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
