//! Template engine implementation

use crate::template::error::TemplateError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Variable map consumed by the engine: placeholder name → value.
///
/// Built once per invocation and never mutated during rendering. Placeholders
/// without an entry render as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    values: BTreeMap<String, String>,
}

impl VarMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of mapped variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no variables are mapped
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (name, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VarMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VarMap::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}

/// Count backslashes immediately before a position
fn count_backslashes_before(text: &str, pos: usize) -> usize {
    let mut count = 0;
    let mut check_pos = pos;
    while check_pos > 0 && text.as_bytes()[check_pos - 1] == b'\\' {
        count += 1;
        check_pos -= 1;
    }
    count
}

/// Count newlines in text
fn count_newlines(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count()
}

/// Check placeholder name grammar: `[A-Za-z_][A-Za-z0-9_]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Output text before a placeholder and halve the backslash run in front of it
///
/// Returns the new line number. The consumed byte count is always exactly
/// `placeholder_start`, so callers continue from the opening braces.
fn emit_text_and_backslashes(
    remaining: &str,
    placeholder_start: usize,
    output: &mut String,
    line: usize,
) -> usize {
    let backslash_count = count_backslashes_before(remaining, placeholder_start);
    let text_end = placeholder_start - backslash_count;

    let mut new_line = line;
    if text_end > 0 {
        let text = &remaining[..text_end];
        output.push_str(text);
        new_line += count_newlines(text);
    }

    // A run of 2n backslashes collapses to n literal ones
    for _ in 0..(backslash_count / 2) {
        output.push('\\');
    }

    new_line
}

/// Find the closing `}}` of an escaped placeholder
///
/// `placeholder_start` points at the opening `{{`. Returns the total bytes
/// consumed from the start of `remaining`, including the closing braces.
fn find_escaped_end(
    remaining: &str,
    placeholder_start: usize,
    line: usize,
) -> Result<usize, TemplateError> {
    let search_start = placeholder_start + 2;
    match remaining[search_start..].find("}}") {
        Some(close) => Ok(search_start + close + 2),
        None => Err(TemplateError::Syntax {
            message: "Unclosed escaped placeholder".to_string(),
            line,
        }),
    }
}

/// Extract and validate the placeholder name between `{{` and `}}`
///
/// `placeholder_start` points at the opening `{{`. Returns the name and the
/// token length in bytes (braces included).
fn take_placeholder_name(
    remaining: &str,
    placeholder_start: usize,
    line: usize,
) -> Result<(&str, usize), TemplateError> {
    let close = remaining[placeholder_start + 2..]
        .find("}}")
        .ok_or_else(|| TemplateError::Syntax {
            message: "Unclosed placeholder".to_string(),
            line,
        })?;

    let raw = &remaining[placeholder_start + 2..placeholder_start + 2 + close];
    let name = raw.trim_matches(|c: char| c.is_ascii_whitespace());

    if name.is_empty() {
        return Err(TemplateError::Syntax {
            message: "Empty placeholder".to_string(),
            line,
        });
    }
    if !is_valid_name(name) {
        return Err(TemplateError::Syntax {
            message: format!("Invalid placeholder name '{}'", name),
            line,
        });
    }

    Ok((name, 2 + close + 2))
}

/// Template engine expanding `{{NAME}}` placeholders from a [`VarMap`]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given variables
    ///
    /// Substituted values are emitted verbatim; they are never re-scanned for
    /// placeholders, so a value may safely contain brace pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Syntax`] on malformed placeholder syntax.
    pub fn render(&self, template: &str, vars: &VarMap) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(template.len());
        let mut line = 1;
        let mut pos = 0;

        while pos < template.len() {
            let remaining = &template[pos..];

            if let Some(placeholder_start) = remaining.find("{{") {
                let escaped = count_backslashes_before(remaining, placeholder_start) % 2 == 1;
                line = emit_text_and_backslashes(remaining, placeholder_start, &mut output, line);

                if escaped {
                    let consumed = find_escaped_end(remaining, placeholder_start, line)?;
                    output.push_str("{{");
                    output.push_str(&remaining[placeholder_start + 2..consumed - 2]);
                    output.push_str("}}");
                    line += count_newlines(&remaining[placeholder_start..consumed]);
                    pos += consumed;
                    continue;
                }

                let (name, token_len) = take_placeholder_name(remaining, placeholder_start, line)?;
                if let Some(value) = vars.get(name) {
                    output.push_str(value);
                }
                // unmapped placeholders render as the empty string

                let token = &remaining[placeholder_start..placeholder_start + token_len];
                line += count_newlines(token);
                pos += placeholder_start + token_len;
            } else {
                output.push_str(remaining);
                break;
            }
        }

        Ok(output)
    }

    /// List the distinct unescaped placeholder names, in first-occurrence order
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Syntax`] on malformed placeholder syntax, the
    /// same cases `render` rejects.
    pub fn scan(&self, template: &str) -> Result<Vec<String>, TemplateError> {
        let mut names: Vec<String> = Vec::new();
        let mut line = 1;
        let mut pos = 0;

        while pos < template.len() {
            let remaining = &template[pos..];

            let placeholder_start = match remaining.find("{{") {
                Some(start) => start,
                None => break,
            };

            line += count_newlines(&remaining[..placeholder_start]);

            if count_backslashes_before(remaining, placeholder_start) % 2 == 1 {
                let consumed = find_escaped_end(remaining, placeholder_start, line)?;
                line += count_newlines(&remaining[placeholder_start..consumed]);
                pos += consumed;
                continue;
            }

            let (name, token_len) = take_placeholder_name(remaining, placeholder_start, line)?;
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }

            let token = &remaining[placeholder_start..placeholder_start + token_len];
            line += count_newlines(token);
            pos += placeholder_start + token_len;
        }

        Ok(names)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template
pub fn render(template: &str, vars: &VarMap) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, vars)
}

/// Convenience function to list a template's placeholder names
pub fn scan(template: &str) -> Result<Vec<String>, TemplateError> {
    TemplateEngine::new().scan(template)
}

/// Load a template from disk and render it
///
/// # Errors
///
/// Returns [`TemplateError::NotFound`] if the path cannot be read, or
/// [`TemplateError::Syntax`] if the template is malformed.
pub fn render_file(path: &Path, vars: &VarMap) -> Result<String, TemplateError> {
    let template = fs::read_to_string(path).map_err(|source| TemplateError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    render(&template, vars)
}

#[cfg(test)]
mod tests;
