//! Property-based tests for circuit composition and parameter evaluation.

use proptest::prelude::*;
use qcodec_ir::{Circuit, Gate, GateKind, IrError, Parameter, QubitId, Variables};

/// Strategy for a valid single-target gate with up to two controls.
fn arb_gate(num_qubits: u32) -> impl Strategy<Value = Gate> {
    let kind = prop_oneof![
        Just(GateKind::X),
        Just(GateKind::H),
        Just(GateKind::T),
        (-3.0_f64..3.0).prop_map(|t| GateKind::Rz(t.into())),
    ];
    (kind, prop::sample::subsequence((0..num_qubits).collect::<Vec<_>>(), 1..=3))
        .prop_map(|(kind, qubits)| {
            let (target, controls) = qubits.split_last().expect("subsequence is non-empty");
            Gate::new(kind, [QubitId(*target)], controls.iter().copied().map(QubitId))
                .expect("distinct qubits form a valid gate")
        })
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (3_u32..=6).prop_flat_map(|n| prop::collection::vec(arb_gate(n), 0..=12))
        .prop_map(|gates| gates.into_iter().collect())
}

proptest! {
    /// Composition concatenates gate sequences in order.
    #[test]
    fn test_compose_preserves_order(a in arb_circuit(), b in arb_circuit()) {
        let composed = a.clone().compose(b.clone());

        prop_assert_eq!(composed.len(), a.len() + b.len());
        prop_assert_eq!(&composed.gates()[..a.len()], a.gates());
        prop_assert_eq!(&composed.gates()[a.len()..], b.gates());
        prop_assert_eq!(composed.num_qubits(), a.num_qubits().max(b.num_qubits()));
    }

    /// The width is the larger of the declared width and the highest used index.
    #[test]
    fn test_num_qubits_covers_every_gate(circuit in arb_circuit(), declared in 0_u32..10) {
        let circuit = circuit.with_qubits(declared);
        let used = circuit.qubits().iter().map(|q| q.index() + 1).max().unwrap_or(0);

        prop_assert_eq!(circuit.num_qubits(), used.max(declared as usize));
    }

    /// Circuits survive a JSON round trip unchanged.
    #[test]
    fn test_circuit_json_roundtrip(circuit in arb_circuit()) {
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, circuit);
    }

    /// Scaling then evaluating equals evaluating then scaling.
    #[test]
    fn test_scaled_evaluation(value in -10.0_f64..10.0, factor in -4.0_f64..4.0) {
        let expr = Parameter::symbol("a") + Parameter::constant(1.0);
        let vars = Variables::new().with("a", value);

        let direct = expr.evaluate(&vars).unwrap() * factor;
        let scaled = expr.scaled(factor).evaluate(&vars).unwrap();
        prop_assert!((direct - scaled).abs() < 1e-9);
    }

    /// Evaluation without a binding names the missing symbol.
    #[test]
    fn test_unbound_symbol_reported(name in "[a-z][a-z0-9_]{0,6}") {
        let expr = Parameter::symbol(name.clone()) * Parameter::pi();
        match expr.evaluate(&Variables::new()) {
            Err(IrError::UnresolvedParameter(missing)) => prop_assert!(missing.contains(&name)),
            other => prop_assert!(false, "expected unresolved parameter, got {:?}", other),
        }
    }
}
