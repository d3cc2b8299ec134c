pub mod carousel;
pub mod catalog;
pub mod gate;
pub mod rand;
pub mod sequence;

pub use carousel::{Carousel, AUTOPLAY_INTERVAL_MS, CELEBRATION_MS, TRANSITION_SETTLE_MS};
pub use catalog::{
    featured_projects, project_matches, ProjectEntry, FEATURED_PROJECT_COUNT, PROJECT_CATALOG,
    PROJECT_CATEGORIES,
};
pub use gate::UnlockGate;
pub use sequence::{
    flash_schedule, generate_sequence, sequence_len, FlashStep, SequenceGame, SubmitOutcome,
    COLOR_COUNT, FLASH_ON_MS, FLASH_STEP_MS, GAME_START_DELAY_MS, LEVEL_CAP, LEVEL_PACING_MS,
    UNLOCK_CELEBRATION_MS,
};
