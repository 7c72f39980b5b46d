//! End-to-end export and import scenarios.

use qcodec_ir::{Circuit, GateKind, Parameter, Pauli, QubitId, Variables};
use qcodec_qasm2::{
    ExportOptions, ImportOptions, QasmError, export, export_to_file, import, import_file,
};

const HEADER: &str = "OPENQASM 2.0;\ninclude \"qelib1.inc\";\n";

fn q(i: u32) -> QubitId {
    QubitId(i)
}

/// Statement lines after the header and register declarations.
fn body(qasm: &str) -> Vec<&str> {
    qasm.lines().skip(4).collect()
}

#[test]
fn test_export_x_then_cx() {
    let circuit = Circuit::empty().x(q(0)).unwrap().cx(q(0), q(1)).unwrap();
    let qasm = export(&circuit, None, &ExportOptions::default()).unwrap();

    let mut last = 0;
    for expected in ["qreg q[2];", "creg c[2];", "x q[0];", "cx q[0],q[1];"] {
        let pos = qasm[last..]
            .find(expected)
            .unwrap_or_else(|| panic!("missing `{expected}` after offset {last} in:\n{qasm}"));
        last += pos + expected.len();
    }
    assert_eq!(body(&qasm), vec!["x q[0];", "cx q[0],q[1];"]);
}

#[test]
fn test_import_skips_barrier() {
    let text = "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nx q[0];\nbarrier q[0];\nz q[1];";
    let circuit = import(text, &ImportOptions::default()).unwrap();

    assert_eq!(circuit.len(), 2);
    assert_eq!(*circuit.gates()[0].kind(), GateKind::X);
    assert_eq!(circuit.gates()[0].targets(), &[q(0)]);
    assert_eq!(*circuit.gates()[1].kind(), GateKind::Z);
    assert_eq!(circuit.gates()[1].targets(), &[q(1)]);
}

#[test]
fn test_if_rejected_in_both_modes() {
    let text = format!("{HEADER}qreg q[1];\ncreg c[1];\nif(c==1) x q[0];\n");
    for options in [ImportOptions::default(), ImportOptions::lenient()] {
        match import(&text, &options) {
            Err(QasmError::UnsupportedOperation { statement, .. }) => {
                assert_eq!(statement, "if(c==1) x q[0]");
            }
            other => panic!("expected unsupported operation, got {other:?}"),
        }
    }
}

#[test]
fn test_opaque_rejected() {
    let text = format!("{HEADER}opaque magic a;\n");
    assert!(matches!(
        import(&text, &ImportOptions::lenient()),
        Err(QasmError::UnsupportedOperation { statement, .. }) if statement == "opaque magic a"
    ));
}

#[test]
fn test_missing_version_by_mode() {
    let text = "include \"qelib1.inc\";\nqreg q[2];\ny q[1];\n";

    assert!(matches!(
        import(text, &ImportOptions::default()),
        Err(QasmError::MalformedHeader { .. })
    ));

    let circuit = import(text, &ImportOptions::lenient()).unwrap();
    assert_eq!(circuit.len(), 1);
    assert_eq!(circuit.num_qubits(), 2);
}

#[test]
fn test_three_controls_rejected() {
    let circuit = Circuit::empty()
        .controlled(GateKind::X, [q(0), q(1), q(2)], q(3))
        .unwrap();
    assert!(matches!(
        export(&circuit, None, &ExportOptions::default()),
        Err(QasmError::UnsupportedControlArity { controls: 3, .. })
    ));
}

#[test]
fn test_toffoli_exported_as_network() {
    let circuit = Circuit::empty().ccx(q(0), q(1), q(2)).unwrap();
    let qasm = export(&circuit, None, &ExportOptions::default()).unwrap();

    let lines = body(&qasm);
    assert_eq!(lines.len(), 15);
    assert!(lines.iter().all(|l| !l.starts_with("ccx")));
    assert_eq!(lines.iter().filter(|l| l.starts_with("cx ")).count(), 6);
}

#[test]
fn test_parameters_require_variables() {
    let circuit = Circuit::empty()
        .ry(Parameter::symbol("theta"), q(0))
        .unwrap()
        .rz(Parameter::symbol("phi") * Parameter::constant(2.0), q(1))
        .unwrap();

    match export(&circuit, None, &ExportOptions::default()) {
        Err(QasmError::MissingVariables(missing)) => {
            assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["phi", "theta"]);
        }
        other => panic!("expected missing variables, got {other:?}"),
    }

    let vars = Variables::new().with("theta", 0.25).with("phi", -0.5);
    let qasm = export(&circuit, Some(&vars), &ExportOptions::default()).unwrap();
    assert_eq!(body(&qasm), vec!["ry(0.25) q[0];", "rz(-1.0) q[1];"]);
    assert!(!qasm.contains("theta") && !qasm.contains("phi"));
}

#[test]
fn test_zx_mode_has_no_y_rotations() {
    let circuit = Circuit::empty()
        .y(q(0))
        .unwrap()
        .ry(0.3, q(1))
        .unwrap()
        .controlled(GateKind::Y, [q(0)], q(1))
        .unwrap();

    let plain = export(&circuit, None, &ExportOptions::default()).unwrap();
    assert!(body(&plain).contains(&"y q[0];"));

    let qasm = export(&circuit, None, &ExportOptions::default().with_zx_calculus(true)).unwrap();
    for line in body(&qasm) {
        let name = line.split([' ', '(']).next().unwrap_or_default();
        assert!(
            !name.trim_start_matches('c').starts_with('y')
                && !name.trim_start_matches('c').starts_with("ry"),
            "unexpected Y rotation in `{line}`"
        );
    }
}

#[test]
fn test_exp_pauli_reaches_primitives() {
    let circuit = Circuit::empty()
        .exp_pauli([(q(0), Pauli::X), (q(1), Pauli::Z)], 0.5)
        .unwrap();
    let qasm = export(&circuit, None, &ExportOptions::default()).unwrap();
    assert!(body(&qasm).contains(&"rz(0.5) q[1];"));

    let reparsed = import(&qasm, &ImportOptions::default()).unwrap();
    assert!(reparsed.is_empty());
    assert_eq!(reparsed.num_qubits(), 2);
}

#[test]
fn test_export_to_file_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bell.qasm");
    let circuit = Circuit::empty().x(q(0)).unwrap().z(q(2)).unwrap();

    let qasm = export_to_file(&circuit, None, &path, &ExportOptions::default()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), qasm);

    let parsed = import_file(&path, &ImportOptions::default()).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.num_qubits(), 3);
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.qasm");
    let circuit = Circuit::empty().x(q(0)).unwrap();

    match export_to_file(&circuit, None, &path, &ExportOptions::default()) {
        Err(QasmError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_unsupported_version() {
    let circuit = Circuit::empty().x(q(0)).unwrap();
    let err = export(&circuit, None, &ExportOptions::default().with_version("1.0")).unwrap_err();
    assert!(matches!(&err, QasmError::UnsupportedVersion(v) if v == "1.0"));
    assert!(err.to_string().contains("only 2.0 is supported"));
}

#[test]
fn test_pauli_takes_first_argument() {
    let text = format!("{HEADER}x q[1],q[2];\nZ q[0];\n");
    for options in [ImportOptions::default(), ImportOptions::lenient()] {
        let circuit = import(&text, &options).unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(*circuit.gates()[0].kind(), GateKind::X);
        assert_eq!(circuit.gates()[0].targets(), &[q(1)]);
        assert_eq!(*circuit.gates()[1].kind(), GateKind::Z);
        assert_eq!(circuit.gates()[1].targets(), &[q(0)]);
    }
}

#[test]
fn test_foreign_include_not_treated_as_header() {
    let text = "OPENQASM 2.0;\ninclude \"other.inc\";\nx q[0];\n";
    assert!(matches!(
        import(text, &ImportOptions::default()),
        Err(QasmError::MalformedHeader { .. })
    ));

    let circuit = import(text, &ImportOptions::lenient()).unwrap();
    assert_eq!(circuit.len(), 1);
}
