//! Cyclic carousel over a fixed ordered entry list.
//!
//! The carousel never touches a clock. `advance`/`retreat`/`go_to` open a
//! transition and report the target; the host schedules the settle delay and
//! calls [`Carousel::settle`] when it elapses. While a transition is open,
//! further index changes are dropped.

/// Delay between opening a transition and the index actually changing.
pub const TRANSITION_SETTLE_MS: u32 = 300;
/// Autoplay period. One interval per component lifetime; never re-armed.
pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;
/// Decay of the celebratory flag raised by forward/jump navigation.
pub const CELEBRATION_MS: u32 = 1500;

#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    viewed: Vec<bool>,
    viewed_count: usize,
    pending: Option<usize>,
}

impl Carousel {
    /// Entry zero starts current and viewed. `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one entry");
        let mut viewed = vec![false; len];
        viewed[0] = true;
        Self {
            len,
            current: 0,
            viewed,
            viewed_count: 1,
            pending: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_viewed(&self, index: usize) -> bool {
        self.viewed.get(index).copied().unwrap_or(false)
    }

    pub fn viewed_count(&self) -> usize {
        self.viewed_count
    }

    pub fn all_viewed(&self) -> bool {
        self.viewed_count == self.len
    }

    /// Opens a transition to the next entry. `None` while transitioning.
    pub fn advance(&mut self) -> Option<usize> {
        let target = (self.current + 1) % self.len;
        self.begin(target)
    }

    /// Opens a transition to the previous entry. `None` while transitioning.
    pub fn retreat(&mut self) -> Option<usize> {
        let target = (self.current + self.len - 1) % self.len;
        self.begin(target)
    }

    /// Opens a transition straight to `index`. `None` while transitioning,
    /// when `index` is already current, or when it is out of range.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len || index == self.current {
            return None;
        }
        self.begin(index)
    }

    /// Applies the pending transition: the target becomes current and is
    /// marked viewed. No-op on an idle carousel.
    pub fn settle(&mut self) -> Option<usize> {
        let target = self.pending.take()?;
        self.current = target;
        if !self.viewed[target] {
            self.viewed[target] = true;
            self.viewed_count += 1;
        }
        Some(target)
    }

    fn begin(&mut self, target: usize) -> Option<usize> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(target);
        Some(target)
    }
}
