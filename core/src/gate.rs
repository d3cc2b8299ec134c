//! Write-once unlock gate. Once open it stays open for the page lifetime;
//! only the first `unlock()` reports the transition, so downstream effects
//! (scroll release, section mounting, the unlock callback) fire exactly once.

#[derive(Clone, Copy, Debug, Default)]
pub struct UnlockGate {
    unlocked: bool,
}

impl UnlockGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Opens the gate. `true` only when this call performed the transition.
    pub fn unlock(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        true
    }
}
