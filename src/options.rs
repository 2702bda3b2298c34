//! Options that select how an operation resolves an inexact result.

use core::{fmt, str::FromStr};

use crate::{error::ErrorMessage, ChronoError};

// ==== RoundingMode ====

/// Where an instant or quotient lands when it falls between two boundaries.
///
/// The modes are directional: `Floor` always moves toward negative infinity,
/// whatever the sign of the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round toward negative infinity.
    #[default]
    Floor,
    /// Round toward positive infinity.
    Ceiling,
    /// Round to the nearest boundary, ties toward negative infinity.
    HalfFloor,
    /// Round to the nearest boundary, ties toward positive infinity.
    HalfCeiling,
    /// Round to the nearest boundary, ties to the even boundary.
    HalfEven,
}

/// The mode applied to the magnitude of a value once its sign is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnsignedRoundingMode {
    Infinity,
    Zero,
    HalfInfinity,
    HalfZero,
    HalfEven,
}

impl RoundingMode {
    /// Negates the current `RoundingMode`.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Floor => Self::Ceiling,
            Self::Ceiling => Self::Floor,
            Self::HalfFloor => Self::HalfCeiling,
            Self::HalfCeiling => Self::HalfFloor,
            Self::HalfEven => Self::HalfEven,
        }
    }

    /// Returns the `UnsignedRoundingMode`
    #[inline]
    pub(crate) const fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        match self {
            Self::Ceiling if is_positive => UnsignedRoundingMode::Infinity,
            Self::Ceiling => UnsignedRoundingMode::Zero,
            Self::Floor if is_positive => UnsignedRoundingMode::Zero,
            Self::Floor => UnsignedRoundingMode::Infinity,
            Self::HalfCeiling if is_positive => UnsignedRoundingMode::HalfInfinity,
            Self::HalfCeiling => UnsignedRoundingMode::HalfZero,
            Self::HalfFloor if is_positive => UnsignedRoundingMode::HalfZero,
            Self::HalfFloor => UnsignedRoundingMode::HalfInfinity,
            Self::HalfEven => UnsignedRoundingMode::HalfEven,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = ChronoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floor" => Ok(Self::Floor),
            "ceiling" => Ok(Self::Ceiling),
            "halfFloor" => Ok(Self::HalfFloor),
            "halfCeiling" => Ok(Self::HalfCeiling),
            "halfEven" => Ok(Self::HalfEven),
            _ => Err(ChronoError::argument().with_enum(ErrorMessage::RoundingModeInvalid)),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
            Self::HalfFloor => "halfFloor",
            Self::HalfCeiling => "halfCeiling",
            Self::HalfEven => "halfEven",
        }
        .fmt(f)
    }
}

// ==== Disambiguation ====

/// Resolution of a local date-time that a zone skips or repeats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disambiguation {
    /// Repeated local times take the earlier instant; skipped local times
    /// are shifted forward by the length of the gap.
    #[default]
    Compatible,
    /// Take the earlier instant. Skipped local times are shifted backward.
    Earlier,
    /// Take the later instant. Skipped local times are shifted forward.
    Later,
    /// Raise an argument error for skipped and repeated local times.
    Reject,
}

impl FromStr for Disambiguation {
    type Err = ChronoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(Self::Compatible),
            "earlier" => Ok(Self::Earlier),
            "later" => Ok(Self::Later),
            "reject" => Ok(Self::Reject),
            _ => Err(ChronoError::argument().with_enum(ErrorMessage::DisambiguationInvalid)),
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible => "compatible",
            Self::Earlier => "earlier",
            Self::Later => "later",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}
