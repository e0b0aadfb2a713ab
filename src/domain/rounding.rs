//! Rounding modes for precision-losing operations.

/// The five IEEE-754 rounding modes used by multiplication, division, and
/// precision decreases.
///
/// Every operation that can lose precision takes an explicit `Rounding`
/// parameter; the default everywhere is [`Rounding::HalfUp`].
///
/// # Examples
///
/// ```
/// use moneta::domain::Rounding;
///
/// assert_eq!(Rounding::default(), Rounding::HalfUp);
/// assert!(Rounding::HalfEven.is_half_mode());
/// assert!(!Rounding::Floor.is_half_mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards negative infinity.
    Floor,
    /// Round towards positive infinity.
    Ceil,
    /// Ties and anything above half round away from zero.
    #[default]
    HalfUp,
    /// Only strictly above half rounds away from zero; ties truncate.
    HalfDown,
    /// Above half rounds away from zero; exact ties round to the nearest
    /// even quotient.
    HalfEven,
}

impl Rounding {
    /// All five modes.
    pub const ALL: [Rounding; 5] = [
        Rounding::Floor,
        Rounding::Ceil,
        Rounding::HalfUp,
        Rounding::HalfDown,
        Rounding::HalfEven,
    ];

    /// Returns `true` for the three half-comparison modes.
    #[must_use]
    pub const fn is_half_mode(&self) -> bool {
        matches!(self, Self::HalfUp | Self::HalfDown | Self::HalfEven)
    }

    /// Returns `true` for the two directed modes.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        matches!(self, Self::Floor | Self::Ceil)
    }

    /// Returns a human-readable description of the mode.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Floor => "round towards negative infinity",
            Self::Ceil => "round towards positive infinity",
            Self::HalfUp => "round half away from zero",
            Self::HalfDown => "round half towards zero",
            Self::HalfEven => "round half to even",
        }
    }
}
