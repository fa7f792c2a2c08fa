use std::error::Error;
use std::fmt::Display;

/// Error returned when a rectangle is built from a slice that does not hold exactly four values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCountError {
    /// Name of the rectangle type that was being built.
    pub target: &'static str,
    /// Number of values found in the slice.
    pub found: usize,
}

impl Display for ComponentCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error while building {}: expected 4 components, found {}",
            self.target, self.found
        )
    }
}

impl Error for ComponentCountError {}
