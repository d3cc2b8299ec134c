//! End-to-end walk of the home showcase flow: view a project, play the two
//! sequence levels, open the gate once.

use epicfolio_core::{Carousel, SequenceGame, SubmitOutcome, UnlockGate};

#[test]
fn full_flow_unlocks_exactly_once() {
    let mut carousel = Carousel::new(6);
    let mut game = SequenceGame::new();
    let mut gate = UnlockGate::new();
    let mut unlock_calls = 0u32;

    // Initial entry already viewed: the engine's entry condition holds.
    assert!(carousel.viewed_count() >= 1);
    game.activate();

    // Level 0.
    game.begin_level(vec![1, 2]);
    assert_eq!(game.submit(1), SubmitOutcome::Progress);
    assert_eq!(game.submit(2), SubmitOutcome::LevelComplete);
    assert_eq!(game.level(), 1);
    assert_eq!(game.input_len(), 0);

    // Level 1: one wrong attempt, then the right one.
    game.begin_level(vec![0, 3]);
    assert_eq!(game.submit(0), SubmitOutcome::Progress);
    assert_eq!(game.submit(1), SubmitOutcome::Mismatch);
    assert_eq!(game.input_len(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.target(), &[0, 3]);

    assert_eq!(game.submit(0), SubmitOutcome::Progress);
    let outcome = game.submit(3);
    assert_eq!(outcome, SubmitOutcome::Unlocked);
    if outcome == SubmitOutcome::Unlocked && gate.unlock() {
        unlock_calls += 1;
    }
    assert!(gate.is_unlocked());
    assert_eq!(unlock_calls, 1);

    // Further input produces no further transitions.
    for color in 0..4u8 {
        assert_eq!(game.submit(color), SubmitOutcome::Ignored);
    }
    assert!(!gate.unlock());
    assert_eq!(unlock_calls, 1);

    // The carousel keeps working after the unlock.
    assert!(carousel.advance().is_some());
    assert_eq!(carousel.settle(), Some(1));
}

#[test]
fn gate_is_write_once() {
    let mut gate = UnlockGate::new();
    assert!(!gate.is_unlocked());
    assert!(gate.unlock());
    assert!(gate.is_unlocked());
    assert!(!gate.unlock());
    assert!(!gate.unlock());
    assert!(gate.is_unlocked());
}
