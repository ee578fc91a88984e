/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub drawn: usize,
    pub attempted: usize,
    pub correct: usize,
    pub remaining: usize,
}

impl QuizProgress {
    /// Fields left to answer correctly among the drawn words.
    #[must_use]
    pub fn open_fields(&self) -> usize {
        (self.drawn * 2).saturating_sub(self.correct)
    }

    /// Every drawn field is correct and nothing is left to draw.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.drawn > 0 && self.remaining == 0 && self.open_fields() == 0
    }
}
