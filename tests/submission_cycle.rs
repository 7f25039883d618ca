use alphapulse_wasm::application::{CycleState, SubmissionGate};

#[test]
fn loader_and_result_are_mutually_exclusive() {
    assert!(!CycleState::Idle.shows_loader());
    assert!(!CycleState::Idle.shows_result());

    assert!(CycleState::Loading.shows_loader());
    assert!(!CycleState::Loading.shows_result());

    assert!(!CycleState::Rendered.shows_loader());
    assert!(CycleState::Rendered.shows_result());
}

#[test]
fn failed_cycle_hides_loader_and_result() {
    // A failed fetch hides the loader and never reveals stale data
    assert!(!CycleState::Failed.shows_loader());
    assert!(!CycleState::Failed.shows_result());
}

#[test]
fn second_submission_is_blocked_while_pending() {
    let mut gate = SubmissionGate::new();
    let generation = gate.begin().unwrap();
    assert!(gate.is_pending());
    assert!(gate.begin().is_none());
    assert!(gate.finish(generation));
    assert!(!gate.is_pending());
}

#[test]
fn stale_completion_is_discarded() {
    let mut gate = SubmissionGate::new();
    let first = gate.begin().unwrap();
    assert!(gate.finish(first));
    let second = gate.begin().unwrap();

    // The first cycle completing again must not end the second one
    assert!(!gate.finish(first));
    assert!(gate.is_pending());
    assert!(gate.finish(second));
}

#[test]
fn generations_are_monotonic() {
    let mut gate = SubmissionGate::new();
    let mut last = 0;
    for _ in 0..5 {
        let generation = gate.begin().unwrap();
        assert!(generation > last);
        last = generation;
        assert!(gate.finish(generation));
    }
}
