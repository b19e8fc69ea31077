//! Marker symbols for data points.
//!
//! A closed enumeration of marker shapes. The core treats these as opaque
//! value types; actual glyph rendering belongs to the chart layer.

/// Marker shape drawn at a data point's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// No marker.
    Empty,
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Upward triangle.
    Triangle,
    /// Diamond.
    Diamond,
    /// Plus-shaped cross.
    Cross,
    /// Five-pointed star.
    Star,
}

impl Symbol {
    /// All marker shapes, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Empty,
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Diamond,
        Self::Cross,
        Self::Star,
    ];

    /// Canonical lowercase name of the symbol.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Cross => "cross",
            Self::Star => "star",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
