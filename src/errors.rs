/// Error types for the payoff analyzer.
/// Every failure is reported whole: either a full analysis is produced
/// or one of these comes back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("portfolio is empty: at least one contract is required")]
    EmptyPortfolio,

    #[error("invalid contract at index {index}: {reason}")]
    InvalidContract { index: usize, reason: String },

    #[error("too many contracts: {count} exceeds limit of {max}")]
    TooManyContracts { count: usize, max: usize },

    #[error("price sweep too wide: {samples} samples exceeds limit of {max}")]
    SweepTooWide { samples: usize, max: usize },

    #[error("aggregate payoff at price {price} is not finite")]
    NonFinitePayoff { price: f64 },

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::Decode(e.to_string())
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
