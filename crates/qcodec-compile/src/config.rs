//! Compiler capability configuration.
//!
//! A [`CompilerConfig`] is one immutable policy value: each flag enables the
//! rewrite of one composite gate form into the primitive vocabulary. The two
//! ZX-calculus flags are kept apart in [`ZxOverrides`] and layered on top of
//! a base policy with [`CompilerConfig::with_zx_overrides`].
//!
//! ```
//! use qcodec_compile::{CompilerConfig, ZxOverrides};
//!
//! let config = CompilerConfig::qasm2_export().with_zx_overrides(ZxOverrides::zx_calculus());
//! assert!(config.ry_gate && config.y_gate);
//! assert!(!config.multicontrol);
//! ```

use serde::{Deserialize, Serialize};

/// Boolean capability flags for the basis compiler.
///
/// `Default` enables nothing, which makes the compiler the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CompilerConfig {
    /// Split single-qubit kinds with several targets into one gate per target.
    pub multitarget: bool,
    /// Rewrite multi-controlled X into H-conjugated multi-controlled phase.
    pub multicontrol: bool,
    /// Expand Trotterized generators into exponentiated Pauli strings.
    pub trotterized: bool,
    /// Rewrite single-qubit Pauli exponentials into Rx/Ry/Rz.
    pub generalized_rotation: bool,
    /// Decompose uncontrolled Pauli-string exponentials.
    pub exponential_pauli: bool,
    /// Decompose controlled Pauli-string exponentials.
    pub controlled_exponential_pauli: bool,
    /// Rewrite powers of the Hadamard gate.
    pub hadamard_power: bool,
    /// Rewrite controlled powers of Pauli gates.
    pub controlled_power: bool,
    /// Rewrite uncontrolled powers of Pauli gates.
    pub power: bool,
    /// Expand Toffoli gates into the Clifford+T network.
    pub toffoli: bool,
    /// Decompose controlled phase gates (including S and T).
    pub controlled_phase: bool,
    /// Rewrite uncontrolled phase gates into Rz.
    pub phase: bool,
    /// Rewrite phase gates with angle π into Z.
    pub phase_to_z: bool,
    /// Decompose controlled rotations.
    pub controlled_rotation: bool,
    /// Expand SWAP gates into CNOTs.
    pub swap: bool,
    /// Collapse doubly-controlled Z and Y onto Toffoli conjugations.
    pub cc_max: bool,
    /// Keep symbolic controlled rotations intact for gradient evaluation.
    pub gradient_mode: bool,
    /// Rewrite Ry into X/Z rotations (ZX-calculus mode).
    pub ry_gate: bool,
    /// Rewrite Y into X/Z gates (ZX-calculus mode).
    pub y_gate: bool,
}

impl CompilerConfig {
    /// The fixed policy used when exporting to OpenQASM 2.0.
    ///
    /// Every composite form is enabled except `multicontrol`, so gates with
    /// more than two controls reach the exporter unchanged. The ZX flags are
    /// off; use [`with_zx_overrides`](Self::with_zx_overrides) to enable them.
    pub const fn qasm2_export() -> Self {
        Self {
            multitarget: true,
            multicontrol: false,
            trotterized: true,
            generalized_rotation: true,
            exponential_pauli: true,
            controlled_exponential_pauli: true,
            hadamard_power: true,
            controlled_power: true,
            power: true,
            toffoli: true,
            controlled_phase: true,
            phase: true,
            phase_to_z: true,
            controlled_rotation: true,
            swap: true,
            cc_max: true,
            gradient_mode: false,
            ry_gate: false,
            y_gate: false,
        }
    }

    /// Return this policy with the ZX-mode flags replaced by `overrides`.
    #[must_use]
    pub const fn with_zx_overrides(mut self, overrides: ZxOverrides) -> Self {
        self.ry_gate = overrides.ry_gate;
        self.y_gate = overrides.y_gate;
        self
    }

    /// The ZX-mode flags of this policy.
    pub const fn zx_overrides(&self) -> ZxOverrides {
        ZxOverrides {
            ry_gate: self.ry_gate,
            y_gate: self.y_gate,
        }
    }
}

/// Flags that only apply when targeting ZX-calculus tools, which have no
/// native Y rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZxOverrides {
    /// Rewrite Ry into X/Z rotations.
    pub ry_gate: bool,
    /// Rewrite Y into X/Z gates.
    pub y_gate: bool,
}

impl ZxOverrides {
    /// Leave Y and Ry untouched.
    pub const fn none() -> Self {
        Self {
            ry_gate: false,
            y_gate: false,
        }
    }

    /// Rewrite both Y and Ry.
    pub const fn zx_calculus() -> Self {
        Self {
            ry_gate: true,
            y_gate: true,
        }
    }

    /// [`zx_calculus`](Self::zx_calculus) if `enabled`, otherwise [`none`](Self::none).
    pub const fn from_mode(enabled: bool) -> Self {
        if enabled {
            Self::zx_calculus()
        } else {
            Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_policy() {
        let config = CompilerConfig::default();
        assert!(!config.multitarget);
        assert!(!config.swap);
        assert_eq!(config.zx_overrides(), ZxOverrides::none());
    }

    #[test]
    fn test_export_policy() {
        let config = CompilerConfig::qasm2_export();
        assert!(config.toffoli && config.cc_max && config.swap);
        assert!(!config.multicontrol);
        assert!(!config.gradient_mode);
        assert_eq!(config.zx_overrides(), ZxOverrides::none());
    }

    #[test]
    fn test_zx_overrides_only_touch_y_flags() {
        let base = CompilerConfig::qasm2_export();
        let zx = base.with_zx_overrides(ZxOverrides::from_mode(true));
        assert!(zx.ry_gate && zx.y_gate);
        assert_eq!(zx.with_zx_overrides(ZxOverrides::none()), base);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: CompilerConfig = serde_json::from_str(r#"{"swap": true}"#).unwrap();
        assert!(config.swap);
        assert!(!config.toffoli);
    }
}
