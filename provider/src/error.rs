use core::fmt;

/// An error raised while building zone rules or resolving identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneProviderError {
    /// The zone identifier was empty or not ASCII.
    InvalidIdentifier,
    /// An offset fell outside of `±18:00`.
    OffsetOutOfRange(i32),
    /// Transition instants were not strictly increasing.
    UnsortedTransitions,
}

impl fmt::Display for TimeZoneProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => f.write_str("zone identifier must be non-empty ASCII"),
            Self::OffsetOutOfRange(offset) => {
                write!(f, "offset of {offset}ms is outside of the supported range")
            }
            Self::UnsortedTransitions => {
                f.write_str("zone transitions must be strictly increasing")
            }
        }
    }
}

impl std::error::Error for TimeZoneProviderError {}
