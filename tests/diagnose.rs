//! Integration tests for the execute-and-diagnose path.
//!
//! These spawn real processes (the point of the rule engine), restricted to
//! universally available commands.

use shellmend::{DiagnoseError, Engine};

#[test]
fn dangerous_commands_are_never_executed() {
    let engine = Engine::new();
    match engine.diagnose("rm -rf /") {
        Err(DiagnoseError::RefusedDangerous(c)) => {
            assert!(c.dangerous);
            assert!((c.confidence - 1.0).abs() < f64::EPSILON);
        }
        other => panic!("expected dangerous refusal, got {other:?}"),
    }
}

#[test]
fn interactive_commands_are_refused_before_spawn() {
    let engine = Engine::new();
    for cmd in ["vim notes.txt", "less /etc/hosts", "python", "ssh host"] {
        assert!(
            matches!(engine.diagnose(cmd), Err(DiagnoseError::RefusedInteractive)),
            "{cmd} was not refused"
        );
    }
}

#[test]
fn missing_executable_defers_to_typo_correction() {
    let engine = Engine::new();
    let c = engine.diagnose("gti status").unwrap().unwrap();
    assert_eq!(c.corrected, "git status");
}

#[test]
fn unknown_missing_executable_yields_nothing() {
    let engine = Engine::new();
    // Not found, and no corpus entry is close enough to propose.
    let result = engine.diagnose("zzqqvvxx-no-such-tool --flag").unwrap();
    assert!(result.is_none());
}

#[cfg(unix)]
#[test]
fn silent_success_has_nothing_to_diagnose() {
    let engine = Engine::new();
    assert!(engine.diagnose("true").unwrap().is_none());
}

#[cfg(unix)]
#[test]
fn successful_output_without_error_patterns_yields_nothing() {
    let engine = Engine::new();
    assert!(engine.diagnose("echo all good here").unwrap().is_none());
}

#[test]
fn empty_command_is_a_negative_result() {
    let engine = Engine::new();
    assert!(engine.diagnose("").unwrap().is_none());
}
