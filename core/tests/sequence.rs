use epicfolio_core::sequence::{
    flash_schedule, generate_sequence, sequence_len, SequenceGame, SubmitOutcome, COLOR_COUNT,
    FLASH_ON_MS, FLASH_STEP_MS, LEVEL_CAP,
};

fn active_game(target: Vec<u8>) -> SequenceGame {
    let mut game = SequenceGame::new();
    game.activate();
    game.begin_level(target);
    game
}

#[test]
fn lengths_follow_the_level_table() {
    assert_eq!(sequence_len(0), 2);
    assert_eq!(sequence_len(1), 2);
    assert_eq!(sequence_len(2), 3);
    assert_eq!(sequence_len(9), 3);
}

#[test]
fn generated_sequences_are_deterministic_and_in_range() {
    for seed in [0u32, 1, 0xDEAD_BEEF, u32::MAX] {
        for level in 0..LEVEL_CAP {
            let first = generate_sequence(seed, level);
            let second = generate_sequence(seed, level);
            assert_eq!(first, second);
            assert_eq!(first.len(), sequence_len(level));
            assert!(first.iter().all(|&color| (color as usize) < COLOR_COUNT));
        }
    }
}

#[test]
fn flash_steps_never_overlap() {
    let plan = flash_schedule(&[3, 1, 0, 2]);
    assert_eq!(plan.len(), 4);
    for (i, step) in plan.iter().enumerate() {
        assert_eq!(step.start_ms, i as u32 * FLASH_STEP_MS);
        assert_eq!(step.duration_ms, FLASH_ON_MS);
    }
    for pair in plan.windows(2) {
        assert!(pair[0].start_ms + pair[0].duration_ms <= pair[1].start_ms);
    }
}

#[test]
fn input_is_ignored_before_activation() {
    let mut game = SequenceGame::new();
    game.begin_level(vec![1, 2]);
    assert_eq!(game.submit(1), SubmitOutcome::Ignored);
    assert_eq!(game.input_len(), 0);
}

#[test]
fn input_is_ignored_while_flashing() {
    let mut game = active_game(vec![1, 2]);
    game.set_flashing(Some(1));
    assert!(!game.awaiting_input());
    assert_eq!(game.submit(1), SubmitOutcome::Ignored);
    assert_eq!(game.input_len(), 0);
    game.set_flashing(None);
    assert!(game.awaiting_input());
    assert_eq!(game.submit(1), SubmitOutcome::Progress);
}

#[test]
fn mismatch_clears_attempt_and_keeps_target() {
    let mut game = active_game(vec![1, 2]);
    assert_eq!(game.submit(1), SubmitOutcome::Progress);
    assert_eq!(game.submit(3), SubmitOutcome::Mismatch);
    assert_eq!(game.input_len(), 0);
    assert_eq!(game.target(), &[1, 2]);
    assert_eq!(game.level(), 0);
    // Same target is immediately retryable.
    assert_eq!(game.submit(1), SubmitOutcome::Progress);
    assert_eq!(game.submit(2), SubmitOutcome::LevelComplete);
}

#[test]
fn mismatch_at_first_position() {
    let mut game = active_game(vec![0, 3]);
    assert_eq!(game.submit(2), SubmitOutcome::Mismatch);
    assert_eq!(game.input_len(), 0);
    assert_eq!(game.target(), &[0, 3]);
}

#[test]
fn level_complete_advances_and_clears_input() {
    let mut game = active_game(vec![1, 2]);
    game.submit(1);
    assert_eq!(game.submit(2), SubmitOutcome::LevelComplete);
    assert_eq!(game.level(), 1);
    assert_eq!(game.input_len(), 0);
    assert!(game.is_active());
}

#[test]
fn completing_the_second_level_unlocks_and_deactivates() {
    let mut game = active_game(vec![1, 2]);
    game.submit(1);
    assert_eq!(game.submit(2), SubmitOutcome::LevelComplete);
    game.begin_level(vec![0, 3]);
    game.submit(0);
    assert_eq!(game.submit(3), SubmitOutcome::Unlocked);
    assert_eq!(game.level(), LEVEL_CAP);
    assert!(!game.is_active());
}

#[test]
fn input_after_unlock_is_ignored() {
    let mut game = active_game(vec![1, 2]);
    game.submit(1);
    game.submit(2);
    game.begin_level(vec![0, 3]);
    game.submit(0);
    assert_eq!(game.submit(3), SubmitOutcome::Unlocked);
    for color in 0..COLOR_COUNT as u8 {
        assert_eq!(game.submit(color), SubmitOutcome::Ignored);
    }
    assert_eq!(game.level(), LEVEL_CAP);
}
