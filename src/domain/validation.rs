use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    InvalidBaseUrl { input: String },
    BatchTooLarge { total: usize, limit: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid device base URL: {input}"),
            Self::BatchTooLarge { total, limit } => {
                write!(f, "batch needs {total} SMS, which is not under {limit}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
