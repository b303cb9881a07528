use thiserror::Error;

pub type WavePeaksResult<T> = Result<T, WavePeaksError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WavePeaksError {
    /// Input sequence holds no samples
    #[error("invalid argument: input is empty")]
    EmptyInput,
    /// Requested output length is zero
    #[error("invalid argument: target length must be positive")]
    ZeroTargetLength,
    /// Selection asked to grow the sequence
    #[error("invalid argument: cannot select {target} samples from {len}")]
    TargetExceedsInput { len: usize, target: usize },
    /// Index or fraction not representable in the sample type
    #[error("numeric cast failed: {0}")]
    NumericCast(&'static str),
    /// Output buffer could not be allocated
    #[error("cannot allocate {0} output samples")]
    Allocation(usize),
    /// Configuration could not be read, parsed or validated
    #[error("invalid waveform config: {0}")]
    Config(String),
}

impl WavePeaksError {
    /// True for errors caused by the caller's arguments rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        use self::WavePeaksError::*;
        match *self {
            EmptyInput | ZeroTargetLength | TargetExceedsInput { .. } => true,
            NumericCast(_) | Allocation(_) | Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_category() {
        assert!(WavePeaksError::EmptyInput.is_invalid_argument());
        assert!(WavePeaksError::ZeroTargetLength.is_invalid_argument());
        assert!(WavePeaksError::TargetExceedsInput { len: 3, target: 5 }.is_invalid_argument());
        assert!(!WavePeaksError::Config("bar_width".into()).is_invalid_argument());
    }

    #[test]
    fn test_display() {
        let err = WavePeaksError::TargetExceedsInput { len: 3, target: 5 };
        assert_eq!(err.to_string(), "invalid argument: cannot select 5 samples from 3");
    }
}
