//! Per-image transform selection.

/// Reflection axis routed to [`apply_flip`](super::apply_flip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Reverse row order (top becomes bottom).
    Vertical,
    /// Reverse column order (left becomes right).
    Horizontal,
    /// Reverse both rows and columns.
    Both,
}

impl FlipAxis {
    #[inline]
    pub fn flips_rows(self) -> bool {
        matches!(self, FlipAxis::Vertical | FlipAxis::Both)
    }

    #[inline]
    pub fn flips_columns(self) -> bool {
        matches!(self, FlipAxis::Horizontal | FlipAxis::Both)
    }
}

/// The transform a user picked for one image.
///
/// The variants are cyclically ordered `None → Vertical → Horizontal → Both
/// → None`, which is the order the menu cycles through with Left/Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    /// Leave the image alone; nothing is written for it.
    #[default]
    None,
    Vertical,
    Horizontal,
    Both,
}

impl TransformMode {
    /// All modes in cycle order.
    pub const ALL: [TransformMode; 4] = [
        TransformMode::None,
        TransformMode::Vertical,
        TransformMode::Horizontal,
        TransformMode::Both,
    ];

    /// Position in the cycle (0-3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TransformMode::None => 0,
            TransformMode::Vertical => 1,
            TransformMode::Horizontal => 2,
            TransformMode::Both => 3,
        }
    }

    /// Mode at `index` modulo 4.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next mode in the cycle, wrapping from `Both` to `None`.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous mode in the cycle, wrapping from `None` to `Both`.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Label shown in the selection menu.
    pub fn label(self) -> &'static str {
        match self {
            TransformMode::None => "None",
            TransformMode::Vertical => "Vertical",
            TransformMode::Horizontal => "Horizontal",
            TransformMode::Both => "Both",
        }
    }

    /// File name prefix for output images, if this mode produces one.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            TransformMode::None => None,
            TransformMode::Vertical => Some("vertical_"),
            TransformMode::Horizontal => Some("horizontal_"),
            TransformMode::Both => Some("both_"),
        }
    }

    /// Axis to flip, or `None` when the image should be skipped.
    pub fn axis(self) -> Option<FlipAxis> {
        match self {
            TransformMode::None => None,
            TransformMode::Vertical => Some(FlipAxis::Vertical),
            TransformMode::Horizontal => Some(FlipAxis::Horizontal),
            TransformMode::Both => Some(FlipAxis::Both),
        }
    }
}
