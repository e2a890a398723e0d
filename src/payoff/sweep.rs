use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::payoff::contract::Contract;
use crate::payoff::SamplePoint;

/// Distance between consecutive sampled prices.
pub const PRICE_STEP: f64 = 1.0;

/// How far the sweep extends beyond the lowest and highest strike.
pub const STRIKE_MARGIN: f64 = 20.0;

/// Default cap on curve length.
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// Lowest and highest strike across the portfolio.
pub fn strike_range(contracts: &[Contract]) -> AnalyzerResult<(f64, f64)> {
    let mut iter = contracts.iter();
    let first = iter.next().ok_or(AnalyzerError::EmptyPortfolio)?;

    let range = iter.fold((first.strike_price, first.strike_price), |(lo, hi), c| {
        (
            if c.strike_price < lo { c.strike_price } else { lo },
            if c.strike_price > hi { c.strike_price } else { hi },
        )
    });
    Ok(range)
}

/// Sum of every contract's payoff at `price`, in input order.
#[inline]
pub fn aggregate_payoff(contracts: &[Contract], price: f64) -> f64 {
    let mut total = 0.0;
    for contract in contracts {
        total += contract.payoff_at(price);
    }
    total
}

/// Empty portfolios and unusable contracts never reach the sweep.
pub fn validate_portfolio(contracts: &[Contract]) -> AnalyzerResult<()> {
    if contracts.is_empty() {
        return Err(AnalyzerError::EmptyPortfolio);
    }
    for (index, contract) in contracts.iter().enumerate() {
        contract.validate(index)?;
    }
    Ok(())
}

/// Payoff curve with the default sample cap.
pub fn compute_curve(contracts: &[Contract]) -> AnalyzerResult<Vec<SamplePoint>> {
    compute_curve_bounded(contracts, DEFAULT_MAX_SAMPLES)
}

/// Sweep price from `min_strike - STRIKE_MARGIN` up to and including
/// `max_strike + STRIKE_MARGIN`.
///
/// Price advances by repeated addition of `PRICE_STEP`, so a non-integral
/// starting point carries its rounding forward exactly as accumulated.
pub fn compute_curve_bounded(
    contracts: &[Contract],
    max_samples: usize,
) -> AnalyzerResult<Vec<SamplePoint>> {
    validate_portfolio(contracts)?;
    let (min_strike, max_strike) = strike_range(contracts)?;

    let start = min_strike - STRIKE_MARGIN;
    let end = max_strike + STRIKE_MARGIN;

    let samples = expected_samples(start, end);
    if samples > max_samples {
        return Err(AnalyzerError::SweepTooWide { samples, max: max_samples });
    }

    let mut curve = Vec::with_capacity(samples + 1);
    let mut price = start;
    while price <= end {
        let y = aggregate_payoff(contracts, price);
        // Finite legs can still overflow once summed.
        if !y.is_finite() {
            return Err(AnalyzerError::NonFinitePayoff { price });
        }
        curve.push(SamplePoint { x: price, y });
        price += PRICE_STEP;
    }

    tracing::debug!(
        contracts = contracts.len(),
        samples = curve.len(),
        start,
        end,
        "payoff curve computed"
    );
    Ok(curve)
}

/// Approximate sample count for `[start, end]`. Accumulated drift can add one.
#[inline]
fn expected_samples(start: f64, end: f64) -> usize {
    ((end - start) / PRICE_STEP).floor() as usize + 1
}
