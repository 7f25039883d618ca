use alphapulse_wasm::infrastructure::ui::{REVEAL_THRESHOLD, RevealPhase, next_phase};

#[test]
fn stays_hidden_below_threshold() {
    let mut phase = RevealPhase::Hidden;
    for ratio in [0.0, 0.02, 0.05, 0.09] {
        phase = phase.on_intersection(ratio, true);
        assert_eq!(phase, RevealPhase::Hidden);
    }
}

#[test]
fn reveals_at_threshold_and_never_reverts() {
    let phase = RevealPhase::Hidden.on_intersection(REVEAL_THRESHOLD, true);
    assert_eq!(phase, RevealPhase::Visible);

    // Scrolling the section back out of the viewport keeps it visible
    let phase = phase.on_intersection(0.0, false);
    assert_eq!(phase, RevealPhase::Visible);
    let phase = phase.on_intersection(0.04, true);
    assert_eq!(phase, RevealPhase::Visible);
}

#[test]
fn not_intersecting_never_reveals() {
    // A ratio report without intersection must not trigger the reveal
    let phase = RevealPhase::Hidden.on_intersection(0.5, false);
    assert_eq!(phase, RevealPhase::Hidden);
}

#[test]
fn observer_decision_follows_the_class_state() {
    // The observer callback persists the phase as the `visible` class and
    // feeds it back through next_phase on every entry.
    assert_eq!(next_phase(false, 0.0, false), RevealPhase::Hidden);
    assert_eq!(next_phase(false, 0.2, true), RevealPhase::Visible);
    // Once the class is set, later entries can never hide the section
    assert_eq!(next_phase(true, 0.0, false), RevealPhase::Visible);
    assert_eq!(next_phase(true, 0.05, true), RevealPhase::Visible);
}
