//! Statement classification.
//!
//! Every statement is classified on its own by its leading token into one
//! [`Statement`] variant. Extending the importer to a new gate means adding
//! a variant here and handling it in the importer.

use logos::Logos;
use rustc_hash::FxHashSet;
use tracing::debug;

use qcodec_ir::{Pauli, QubitId};

use crate::error::{QasmError, QasmResult};
use crate::lexer::Token;

/// Gates declared by `qelib1.inc`, plus the built-ins `U` and `CX`.
const QELIB_GATES: &[&str] = &[
    "U", "CX", "u3", "u2", "u1", "u0", "u", "p", "cx", "id", "x", "y", "z", "h", "s", "sdg", "t",
    "tdg", "rx", "ry", "rz", "sx", "sxdg", "cz", "cy", "swap", "ch", "ccx", "cswap", "crx", "cry",
    "crz", "cu1", "cp", "cu3", "csx", "cu", "rxx", "rzz", "rccx", "rc3x", "c3x", "c3sqrtx", "c4x",
];

/// Primitive names the exporter writes after its `c` prefixes.
const PRIMITIVE_NAMES: &[&str] = &[
    "x", "y", "z", "h", "s", "sdg", "t", "tdg", "rx", "ry", "rz",
];

/// A classified QASM statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A statement without effect on the circuit (`barrier`, `creg`,
    /// `measure`, `id`).
    Ignored(&'static str),
    /// A quantum register declaration.
    QuantumRegister {
        /// Register name.
        name: String,
        /// Number of qubits.
        size: u32,
    },
    /// An uncontrolled Pauli gate on one qubit.
    Pauli {
        /// Which Pauli.
        axis: Pauli,
        /// Register the qubit belongs to.
        register: String,
        /// Index of the qubit in the register.
        target: QubitId,
    },
    /// A known gate the importer accepts but does not rebuild.
    Unreconstructed(String),
    /// Invocation of a gate defined in the source.
    CustomCall(String),
    /// `opaque` or `if`.
    Unsupported,
    /// Any other leading identifier.
    Unknown(String),
}

impl Statement {
    /// Classify one statement (without its trailing `;`).
    ///
    /// `custom` holds the names of gates defined in the source.
    pub fn parse(text: &str, custom: &FxHashSet<&str>) -> QasmResult<Self> {
        let mut args = Arguments::new(text);
        let Some(head) = args.next_token() else {
            return Ok(Statement::Unknown(String::new()));
        };

        Ok(match head {
            Token::Barrier => Statement::Ignored("barrier"),
            Token::Creg => Statement::Ignored("creg"),
            Token::Measure => Statement::Ignored("measure"),
            Token::Opaque | Token::If => Statement::Unsupported,
            Token::Reset => Statement::Unreconstructed("reset".into()),
            Token::Qreg => {
                let (name, size) = args.qubit_ref()?;
                args.finish()?;
                let size = u32::try_from(size)
                    .map_err(|_| args.error(format!("register size {size} is too large")))?;
                Statement::QuantumRegister { name, size }
            }
            Token::Identifier(name) if custom.contains(name.as_str()) => {
                Statement::CustomCall(name)
            }
            Token::Identifier(name) => match name.to_ascii_lowercase().as_str() {
                "id" => Statement::Ignored("id"),
                lower @ ("x" | "y" | "z") => {
                    let axis = match lower {
                        "x" => Pauli::X,
                        "y" => Pauli::Y,
                        _ => Pauli::Z,
                    };
                    let (register, index) = args.qubit_ref()?;
                    let skipped = args.skip_rest();
                    if skipped > 0 {
                        debug!(statement = text, skipped, "ignoring arguments after the first qubit");
                    }
                    let index = u32::try_from(index)
                        .map_err(|_| args.error(format!("qubit index {index} is too large")))?;
                    Statement::Pauli {
                        axis,
                        register,
                        target: QubitId(index),
                    }
                }
                lower if is_known_gate(lower) => Statement::Unreconstructed(name),
                _ => Statement::Unknown(name),
            },
            other => Statement::Unknown(other.to_string()),
        })
    }
}

/// Check if `name` is a `qelib1.inc` gate or a gate the exporter can write.
fn is_known_gate(name: &str) -> bool {
    if QELIB_GATES.contains(&name) {
        return true;
    }
    let base = name.trim_start_matches('c');
    let prefix = name.len() - base.len();
    prefix <= 2 && PRIMITIVE_NAMES.contains(&base)
}

/// Token cursor over the arguments of one statement.
struct Arguments<'a> {
    text: &'a str,
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> Arguments<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lexer: Token::lexer(text),
        }
    }

    fn error(&self, reason: String) -> QasmError {
        QasmError::ArgumentParseError {
            statement: self.text.to_string(),
            reason,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.lexer.next().and_then(Result::ok)
    }

    fn expect(&mut self, expected: &Token) -> QasmResult<()> {
        match self.lexer.next() {
            Some(Ok(token)) if token == *expected => Ok(()),
            Some(Ok(token)) => Err(self.error(format!("expected `{expected}`, found `{token}`"))),
            Some(Err(())) => Err(self.error(format!(
                "invalid token `{}`",
                self.lexer.slice()
            ))),
            None => Err(self.error(format!("expected `{expected}`, found end of statement"))),
        }
    }

    /// Read `name[index]`.
    fn qubit_ref(&mut self) -> QasmResult<(String, u64)> {
        let name = match self.lexer.next() {
            Some(Ok(Token::Identifier(name))) => name,
            _ => return Err(self.error("expected a `reg[index]` argument".into())),
        };
        self.expect(&Token::LBracket)?;
        let index = match self.lexer.next() {
            Some(Ok(Token::Integer(index))) => index,
            _ => return Err(self.error("expected an integer index".into())),
        };
        self.expect(&Token::RBracket)?;
        Ok((name, index))
    }

    /// Consume whatever follows and return the number of tokens skipped.
    fn skip_rest(&mut self) -> usize {
        self.lexer.by_ref().count()
    }

    /// Require that no arguments are left.
    fn finish(&mut self) -> QasmResult<()> {
        match self.lexer.next() {
            None => Ok(()),
            Some(_) => Err(self.error(format!(
                "unexpected `{}` after the qubit argument",
                self.lexer.slice()
            ))),
        }
    }
}
