//! Memory-sequence engine gating the rest of the home page.
//!
//! The engine is time-free: [`flash_schedule`] turns a target sequence into a
//! presentation plan the host plays back with its own timers, and
//! [`SequenceGame::set_flashing`] reflects the playback state so input can be
//! rejected while an element is lit. A mismatch clears the attempt and leaves
//! the target untouched; the player retries the same sequence.

use crate::rand::rand_index;

/// Number of distinct pad colors.
pub const COLOR_COUNT: usize = 4;
/// Levels played before the gate opens.
pub const LEVEL_CAP: u32 = 2;
/// Offset between consecutive flash starts.
pub const FLASH_STEP_MS: u32 = 800;
/// How long each element stays lit. Shorter than the step, so flashes
/// never overlap.
pub const FLASH_ON_MS: u32 = 600;
/// Delay between the first viewed entry and the engine waking up.
pub const GAME_START_DELAY_MS: u32 = 2000;
/// Breather before each level's sequence is generated and presented.
pub const LEVEL_PACING_MS: u32 = 1500;
/// Decay of the unlock celebration.
pub const UNLOCK_CELEBRATION_MS: u32 = 3000;

/// Two elements for the two playable levels; three from level 2 on, which
/// the cap keeps unreachable.
pub fn sequence_len(level: u32) -> usize {
    if level < 2 {
        2
    } else {
        3
    }
}

/// Deterministic draw for a level's target sequence. Hosts feed a wall-clock
/// seed; tests skip this and hand [`SequenceGame::begin_level`] an exact
/// sequence instead.
pub fn generate_sequence(seed: u32, level: u32) -> Vec<u8> {
    let len = sequence_len(level);
    (0..len)
        .map(|i| {
            let salt = level.wrapping_mul(0x1000_0);
            rand_index(seed, salt.wrapping_add(i as u32), COLOR_COUNT) as u8
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashStep {
    pub color: u8,
    pub start_ms: u32,
    pub duration_ms: u32,
}

/// Presentation plan for a target sequence: element `i` lights at
/// `i * FLASH_STEP_MS` for `FLASH_ON_MS`.
pub fn flash_schedule(target: &[u8]) -> Vec<FlashStep> {
    target
        .iter()
        .enumerate()
        .map(|(i, &color)| FlashStep {
            color,
            start_ms: i as u32 * FLASH_STEP_MS,
            duration_ms: FLASH_ON_MS,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Engine inactive or an element is flashing; input dropped.
    Ignored,
    /// Wrong element. Attempt cleared, same target stays up.
    Mismatch,
    /// Correct element, sequence not yet complete.
    Progress,
    /// Sequence completed; next level is up to the host to start.
    LevelComplete,
    /// Final level completed; engine has deactivated itself.
    Unlocked,
}

#[derive(Clone, Debug)]
pub struct SequenceGame {
    level: u32,
    target: Vec<u8>,
    input: Vec<u8>,
    active: bool,
    flashing: Option<u8>,
}

impl SequenceGame {
    pub fn new() -> Self {
        Self {
            level: 0,
            target: Vec::new(),
            input: Vec::new(),
            active: false,
            flashing: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn flashing(&self) -> Option<u8> {
        self.flashing
    }

    /// Accepting pad presses right now?
    pub fn awaiting_input(&self) -> bool {
        self.active && self.flashing.is_none() && !self.target.is_empty()
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Installs a level's target and clears the attempt. The target never
    /// changes mid-level; hosts call this once per level start.
    pub fn begin_level(&mut self, target: Vec<u8>) {
        self.target = target;
        self.input.clear();
    }

    /// Mirrors the host's playback: input is rejected while `Some`.
    pub fn set_flashing(&mut self, flashing: Option<u8>) {
        self.flashing = flashing;
    }

    pub fn submit(&mut self, color: u8) -> SubmitOutcome {
        if !self.active || self.flashing.is_some() || self.target.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.input.push(color);
        let position = self.input.len() - 1;
        if self.target[position] != color {
            self.input.clear();
            return SubmitOutcome::Mismatch;
        }
        if self.input.len() < self.target.len() {
            return SubmitOutcome::Progress;
        }
        let completed = self.level;
        self.level += 1;
        self.input.clear();
        if completed + 1 >= LEVEL_CAP {
            self.active = false;
            self.flashing = None;
            self.target.clear();
            return SubmitOutcome::Unlocked;
        }
        SubmitOutcome::LevelComplete
    }
}

impl Default for SequenceGame {
    fn default() -> Self {
        Self::new()
    }
}
