//! Unit tests for the readiness state machine encoding

use birdsearch_domain::ReadinessState;

#[test]
fn test_u8_round_trip_for_every_state() {
    for state in [
        ReadinessState::Uninitialized,
        ReadinessState::Initializing,
        ReadinessState::Ready,
        ReadinessState::Failed,
    ] {
        assert_eq!(ReadinessState::from_u8(state.as_u8()), state);
    }
}

#[test]
fn test_unknown_discriminant_maps_to_failed() {
    assert_eq!(ReadinessState::from_u8(42), ReadinessState::Failed);
}

#[test]
fn test_only_ready_accepts_searches() {
    assert!(ReadinessState::Ready.is_ready());
    assert!(!ReadinessState::Uninitialized.is_ready());
    assert!(!ReadinessState::Initializing.is_ready());
    assert!(!ReadinessState::Failed.is_ready());
}

#[test]
fn test_initialization_may_start_from_uninitialized_or_failed() {
    assert!(ReadinessState::Uninitialized.can_start_initialization());
    assert!(ReadinessState::Failed.can_start_initialization());
    assert!(!ReadinessState::Initializing.can_start_initialization());
    assert!(!ReadinessState::Ready.can_start_initialization());
}

#[test]
fn test_display_is_lowercase() {
    assert_eq!(ReadinessState::Initializing.to_string(), "initializing");
    assert_eq!(
        serde_json::to_string(&ReadinessState::Ready).unwrap(),
        "\"ready\""
    );
}
