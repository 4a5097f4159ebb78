//! Error type shared by every curve operation.
use core::fmt;

/// Curve arithmetic error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveError {
    /// Coordinates do not satisfy the curve equation
    NotOnCurve,
    /// Field division by zero
    DivisionByZero,
    /// Pairing input failed membership validation
    InvalidPoint,
    /// Hash-to-curve ran out of counter values without hitting the curve
    HashToCurveExhausted,
    /// Compressed point flags or coordinate are malformed
    InvalidEncoding,
}

impl core::error::Error for CurveError {}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotOnCurve => "point is not on the curve",
            Self::DivisionByZero => "division by zero in field",
            Self::InvalidPoint => "invalid point in pairing input",
            Self::HashToCurveExhausted => "hash to curve exhausted all counter values",
            Self::InvalidEncoding => "invalid compressed point encoding",
        };
        f.write_str(s)
    }
}
