//! Export and import options.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use qcodec_ir::Variables;

use crate::error::{QasmError, QasmResult};

/// A supported OpenQASM language version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QasmVersion {
    /// OpenQASM 2.0.
    #[default]
    V2_0,
}

impl QasmVersion {
    /// Parse a version string such as `"2.0"`.
    pub fn parse(version: &str) -> QasmResult<Self> {
        match version.trim() {
            "2.0" => Ok(QasmVersion::V2_0),
            other => Err(QasmError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl fmt::Display for QasmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QasmVersion::V2_0 => write!(f, "2.0"),
        }
    }
}

/// Options for [`export`](crate::export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Requested language version; validated at export time.
    pub version: String,
    /// Avoid Y gates and Y rotations for ZX-calculus consumers.
    pub zx_calculus: bool,
    /// Also write the program to this file.
    pub destination: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            version: QasmVersion::V2_0.to_string(),
            zx_calculus: false,
            destination: None,
        }
    }
}

impl ExportOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable ZX-calculus mode.
    #[must_use]
    pub fn with_zx_calculus(mut self, enabled: bool) -> Self {
        self.zx_calculus = enabled;
        self
    }

    /// Write the program to `path` as well as returning it.
    #[must_use]
    pub fn with_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }
}

/// Options for [`import`](crate::import).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Expected language version.
    pub version: String,
    /// Require exact header directives and reject unknown statements.
    pub strict: bool,
    /// Variable values. No reconstructed gate is parametrized, so these are
    /// currently not consulted.
    pub variables: Option<Variables>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            version: QasmVersion::V2_0.to_string(),
            strict: true,
            variables: None,
        }
    }
}

impl ImportOptions {
    /// Create the default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient options: tolerate missing headers and skip unknown statements.
    pub fn lenient() -> Self {
        Self::default().with_strict(false)
    }

    /// Set the expected language version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Attach variable values.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }
}
