pub mod contract;
pub mod metrics;
pub mod sweep;

use smallvec::SmallVec;

pub use contract::{Contract, OptionType, Position};
pub use metrics::{analyze, break_even_points, curve_break_evens, curve_extremes, max_loss, max_profit};
pub use sweep::{compute_curve, strike_range};

/// Most portfolios cross zero at most a handful of times.
pub type BreakEvens = SmallVec<[f64; 4]>;

/// One sampled price and the portfolio's aggregate payoff there.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Curve plus the metrics derived from it. No state beyond the curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "xy_values")]
    pub curve: Vec<SamplePoint>,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even_points: BreakEvens,
}
