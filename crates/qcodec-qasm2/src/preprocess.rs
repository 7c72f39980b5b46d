//! Source cleaning ahead of statement parsing.
//!
//! Cleaning removes `//` comments and blank lines, checks and consumes the
//! `OPENQASM` and `include` directives, and cuts every `gate` definition
//! block out of the text. What remains is a plain stream of `;`-terminated
//! statements.

use tracing::debug;

use crate::error::{QasmError, QasmResult};

/// The required version directive.
pub const VERSION_DIRECTIVE: &str = "OPENQASM 2.0;";

/// The required standard-library include.
pub const INCLUDE_DIRECTIVE: &str = "include \"qelib1.inc\";";

/// A custom gate definition located in the source.
///
/// Only the header is read; the body is kept as raw text and never
/// interpreted, so such gates cannot be used by the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDefinition {
    /// Gate name.
    pub name: String,
    /// Names of the classical parameters.
    pub params: Vec<String>,
    /// Names of the qubit arguments.
    pub qubits: Vec<String>,
    /// Raw body between the braces.
    pub body: String,
}

/// Output of [`clean`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedSource {
    /// Statement text with comments, directives and definitions removed.
    pub body: String,
    /// Custom gate definitions in source order.
    pub definitions: Vec<GateDefinition>,
}

impl CleanedSource {
    /// Non-empty statements, trimmed and without their terminating `;`.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.body.split(';').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Clean QASM source text.
///
/// In strict mode the first two retained lines must be exactly
/// [`VERSION_DIRECTIVE`] and [`INCLUDE_DIRECTIVE`]. Otherwise a directive
/// line is consumed when present and left alone when not.
pub fn clean(text: &str, strict: bool) -> QasmResult<CleanedSource> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.split("//").next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .collect();

    let mut rest = lines.as_slice();
    for (expected, prefix) in [(VERSION_DIRECTIVE, "OPENQASM"), (INCLUDE_DIRECTIVE, INCLUDE_DIRECTIVE)] {
        let first = rest.first().copied();
        if strict {
            match first {
                Some(line) if normalize(line) == expected => rest = &rest[1..],
                other => {
                    return Err(QasmError::MalformedHeader {
                        expected,
                        found: other.unwrap_or("end of input").to_string(),
                    });
                }
            }
        } else if first.is_some_and(|line| normalize(line).starts_with(prefix)) {
            rest = &rest[1..];
        } else {
            debug!("No `{expected}` directive, continuing without it");
        }
    }

    let mut body = rest.join("\n");
    let definitions = extract_definitions(&mut body)?;
    Ok(CleanedSource { body, definitions })
}

/// Collapse internal whitespace so `OPENQASM  2.0 ;` compares equal.
fn normalize(line: &str) -> String {
    let joined = line.split_whitespace().collect::<Vec<_>>().join(" ");
    joined.replace(" ;", ";")
}

/// Remove every `gate ... { ... }` block from `body`.
///
/// The closing brace is the first `}` after the keyword; a `{` inside the
/// block is rejected instead of being matched.
fn extract_definitions(body: &mut String) -> QasmResult<Vec<GateDefinition>> {
    let mut definitions = Vec::new();
    let mut from = 0;

    while let Some(start) = find_keyword(body, "gate", from) {
        let block = &body[start..];
        let Some(close) = block.find('}') else {
            return Err(QasmError::UnterminatedGateDefinition {
                name: definition_name(block),
            });
        };
        let open = match block.find('{') {
            Some(open) if open < close => open,
            _ => {
                return Err(QasmError::UnterminatedGateDefinition {
                    name: definition_name(block),
                });
            }
        };
        let inner = &block[open + 1..close];
        if inner.contains('{') {
            return Err(QasmError::NestedGateDefinition {
                name: definition_name(block),
            });
        }

        let definition = parse_header(&block["gate".len()..open], inner)?;
        debug!("Skipping body of custom gate '{}'", definition.name);
        definitions.push(definition);

        body.replace_range(start..=start + close, "");
        from = start;
    }

    Ok(definitions)
}

/// Find `keyword` at or after `from` where it stands as a whole word
/// followed by whitespace.
fn find_keyword(text: &str, keyword: &str, from: usize) -> Option<usize> {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut offset = from;
    while let Some(pos) = text[offset..].find(keyword) {
        let start = offset + pos;
        let end = start + keyword.len();
        let before_ok = text[..start].chars().next_back().is_none_or(|c| !is_ident(c));
        let after_ok = text[end..].chars().next().is_some_and(char::is_whitespace);
        if before_ok && after_ok {
            return Some(start);
        }
        offset = end;
    }
    None
}

fn definition_name(block: &str) -> String {
    block["gate".len()..]
        .split(|c: char| c.is_whitespace() || c == '(' || c == '{')
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Parse `name(p1, p2) a, b` into a definition.
fn parse_header(header: &str, body: &str) -> QasmResult<GateDefinition> {
    let header = header.trim();
    let malformed = || QasmError::MalformedGateDefinition(format!("gate {header}"));

    let (name, params, args) = match header.find('(') {
        Some(lp) => {
            let rp = header[lp..].find(')').map(|i| lp + i).ok_or_else(malformed)?;
            (&header[..lp], split_names(&header[lp + 1..rp]), &header[rp + 1..])
        }
        None => {
            let (name, args) = header
                .split_once(char::is_whitespace)
                .unwrap_or((header, ""));
            (name, Vec::new(), args)
        }
    };

    let name = name.trim();
    let qubits = split_names(args);
    if name.is_empty() || qubits.is_empty() {
        return Err(malformed());
    }

    Ok(GateDefinition {
        name: name.to_string(),
        params,
        qubits,
        body: body.trim().to_string(),
    })
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
