//! Interface error type shared by the word and byte entry points.
use core::fmt;
use pairing::CurveError;

/// Precompile result type.
pub type PrecompileResult<T> = Result<T, PrecompileError>;

/// Precompile error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// Curve arithmetic rejected the input
    Curve(CurveError),
    /// Bn128 field element is not below the modulus
    Bn128FieldPointNotAMember,
    /// Bn128 pairing input is not a whole number of elements
    Bn128PairLength,
}

impl From<CurveError> for PrecompileError {
    fn from(err: CurveError) -> Self {
        Self::Curve(err)
    }
}

impl core::error::Error for PrecompileError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Curve(err) => return fmt::Display::fmt(err, f),
            Self::Bn128FieldPointNotAMember => "field point not a member of bn128 curve",
            Self::Bn128PairLength => "bn128 invalid pair length",
        };
        f.write_str(s)
    }
}
