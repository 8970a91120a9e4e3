/// What a single slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotDisplay {
    #[default]
    Empty,
    /// The entered character, visible in clear text.
    Digit(char),
    /// The entered character hidden behind the mask glyph.
    Masked,
}

impl SlotDisplay {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked)
    }
}
