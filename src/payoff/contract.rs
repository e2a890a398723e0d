use crate::errors::{AnalyzerError, AnalyzerResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest strike magnitude accepted. Beyond this, unit price steps start
/// losing resolution and the sweep can stall.
pub const MAX_STRIKE_MAGNITUDE: f64 = 1.0e12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[serde(alias = "Call", alias = "CALL")]
    Call,
    #[serde(alias = "Put", alias = "PUT")]
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "Long", alias = "LONG")]
    Long,
    #[serde(alias = "Short", alias = "SHORT")]
    Short,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// A single options position as submitted by the caller.
///
/// `expiration_date` travels with the contract but payoff is always
/// evaluated at expiration, so it never enters the math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(rename = "type")]
    pub option_type: OptionType,
    #[serde(alias = "strikePrice")]
    pub strike_price: f64,
    #[serde(default)]
    pub bid: f64,
    #[serde(default)]
    pub ask: f64,
    #[serde(default, alias = "expirationDate")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(rename = "long_short", alias = "longShort")]
    pub position: Position,
}

impl Contract {
    pub fn new(option_type: OptionType, position: Position, strike_price: f64, bid: f64, ask: f64) -> Self {
        Self {
            option_type,
            strike_price,
            bid,
            ask,
            expiration_date: None,
            position,
        }
    }

    /// Intrinsic value at expiration for one unit of the underlying.
    #[inline]
    pub fn intrinsic_value(&self, price: f64) -> f64 {
        match self.option_type {
            OptionType::Call => (price - self.strike_price).max(0.0),
            OptionType::Put => (self.strike_price - price).max(0.0),
        }
    }

    /// Profit/loss at expiration net of premium.
    /// Long legs pay the ask, short legs collect the bid.
    #[inline]
    pub fn payoff_at(&self, price: f64) -> f64 {
        let intrinsic = self.intrinsic_value(price);
        match self.position {
            Position::Long => intrinsic - self.ask,
            Position::Short => self.bid - intrinsic,
        }
    }

    /// Reject values the sweep cannot work with.
    pub fn validate(&self, index: usize) -> AnalyzerResult<()> {
        let invalid = |reason: String| AnalyzerError::InvalidContract { index, reason };

        if !self.strike_price.is_finite() {
            return Err(invalid(format!("strike price {} is not finite", self.strike_price)));
        }
        if self.strike_price.abs() > MAX_STRIKE_MAGNITUDE {
            return Err(invalid(format!(
                "strike price {} exceeds magnitude limit {MAX_STRIKE_MAGNITUDE}",
                self.strike_price
            )));
        }
        if !self.bid.is_finite() {
            return Err(invalid(format!("bid {} is not finite", self.bid)));
        }
        if !self.ask.is_finite() {
            return Err(invalid(format!("ask {} is not finite", self.ask)));
        }
        Ok(())
    }
}
