//! The "Press me" counter shown next to the slides.

/// One integer, one way to change it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// The button was pressed.
    pub fn press(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Press me - {}", self.count)
    }
}
