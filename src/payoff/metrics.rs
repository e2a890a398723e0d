use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::payoff::contract::Contract;
use crate::payoff::sweep::{compute_curve, compute_curve_bounded};
use crate::payoff::{AnalysisResult, BreakEvens, SamplePoint};

/// Running scan over a payoff curve: extremes and sign flips together.
struct CurveScan {
    max_profit: f64,
    max_loss: f64,
    prev_y: Option<f64>,
    break_evens: BreakEvens,
}

impl CurveScan {
    fn new() -> Self {
        Self {
            max_profit: f64::NEG_INFINITY,
            max_loss: f64::INFINITY,
            prev_y: None,
            break_evens: BreakEvens::new(),
        }
    }

    #[inline]
    fn observe(&mut self, point: &SamplePoint) {
        if point.y > self.max_profit {
            self.max_profit = point.y;
        }
        if point.y < self.max_loss {
            self.max_loss = point.y;
        }
        if let Some(prev) = self.prev_y {
            if crosses_zero(prev, point.y) {
                self.break_evens.push(point.x);
            }
        }
        self.prev_y = Some(point.y);
    }

    fn scan(curve: &[SamplePoint]) -> Option<Self> {
        if curve.is_empty() {
            return None;
        }
        let mut scan = Self::new();
        for point in curve {
            scan.observe(point);
        }
        Some(scan)
    }
}

/// Strict sign change. A sample sitting exactly on zero is not a crossing.
#[inline]
fn crosses_zero(prev: f64, next: f64) -> bool {
    (prev < 0.0 && next > 0.0) || (prev > 0.0 && next < 0.0)
}

/// `(max_profit, max_loss)` of a curve, `None` when it has no samples.
pub fn curve_extremes(curve: &[SamplePoint]) -> Option<(f64, f64)> {
    CurveScan::scan(curve).map(|s| (s.max_profit, s.max_loss))
}

/// Prices of the later sample in every adjacent pair whose payoff flips sign.
pub fn curve_break_evens(curve: &[SamplePoint]) -> BreakEvens {
    CurveScan::scan(curve)
        .map(|s| s.break_evens)
        .unwrap_or_default()
}

pub fn max_profit(contracts: &[Contract]) -> AnalyzerResult<f64> {
    let curve = compute_curve(contracts)?;
    curve_extremes(&curve)
        .map(|(profit, _)| profit)
        .ok_or(AnalyzerError::EmptyPortfolio)
}

pub fn max_loss(contracts: &[Contract]) -> AnalyzerResult<f64> {
    let curve = compute_curve(contracts)?;
    curve_extremes(&curve)
        .map(|(_, loss)| loss)
        .ok_or(AnalyzerError::EmptyPortfolio)
}

pub fn break_even_points(contracts: &[Contract]) -> AnalyzerResult<BreakEvens> {
    let curve = compute_curve(contracts)?;
    Ok(curve_break_evens(&curve))
}

/// Full analysis in a single sweep: the curve is generated once and one
/// scan folds extremes and break-evens out of it.
pub fn analyze(contracts: &[Contract], max_samples: usize) -> AnalyzerResult<AnalysisResult> {
    let curve = compute_curve_bounded(contracts, max_samples)?;
    let scan = CurveScan::scan(&curve).ok_or(AnalyzerError::EmptyPortfolio)?;

    Ok(AnalysisResult {
        curve,
        max_profit: scan.max_profit,
        max_loss: scan.max_loss,
        break_even_points: scan.break_evens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::contract::{OptionType, Position};
    use crate::payoff::sweep::DEFAULT_MAX_SAMPLES;

    fn contract(t: OptionType, p: Position, strike: f64, bid: f64, ask: f64) -> Contract {
        Contract::new(t, p, strike, bid, ask)
    }

    #[test]
    fn test_long_call_extremes() {
        let c = [contract(OptionType::Call, Position::Long, 100.0, 0.0, 5.0)];
        assert_eq!(max_profit(&c).unwrap(), 15.0);
        assert_eq!(max_loss(&c).unwrap(), -5.0);
    }

    #[test]
    fn test_short_put_extremes() {
        let c = [contract(OptionType::Put, Position::Short, 50.0, 3.0, 3.5)];
        assert_eq!(max_profit(&c).unwrap(), 3.0);
        assert_eq!(max_loss(&c).unwrap(), -17.0);
    }

    #[test]
    fn test_break_even_reports_later_sample() {
        // y(105) = -0.5, y(106) = 0.5
        let c = [contract(OptionType::Call, Position::Long, 100.0, 0.0, 5.5)];
        let points = break_even_points(&c).unwrap();
        assert_eq!(points.as_slice(), &[106.0]);
    }

    #[test]
    fn test_break_even_on_exact_zero_not_detected() {
        // y(105) = 0 exactly, so no strict flip on either side
        let c = [contract(OptionType::Call, Position::Long, 100.0, 0.0, 5.0)];
        assert!(break_even_points(&c).unwrap().is_empty());
    }

    #[test]
    fn test_short_put_break_even() {
        // y(46) = -0.5, y(47) = 0.5
        let c = [contract(OptionType::Put, Position::Short, 50.0, 3.5, 4.0)];
        assert_eq!(break_even_points(&c).unwrap().as_slice(), &[47.0]);
    }

    #[test]
    fn test_short_call_break_even_positive_to_negative() {
        // y(105) = 0.5, y(106) = -0.5
        let c = [contract(OptionType::Call, Position::Short, 100.0, 5.5, 6.0)];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        assert_eq!(result.break_even_points.as_slice(), &[106.0]);
        assert_eq!(result.max_profit, 5.5);
        assert_eq!(result.max_loss, -14.5);
    }

    #[test]
    fn test_offsetting_calls_flat() {
        let c = [
            contract(OptionType::Call, Position::Long, 100.0, 0.0, 5.0),
            contract(OptionType::Call, Position::Short, 100.0, 5.0, 0.0),
        ];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        assert!(result.curve.iter().all(|p| p.y == 0.0));
        assert_eq!(result.max_profit, 0.0);
        assert_eq!(result.max_loss, 0.0);
        assert!(result.break_even_points.is_empty());
    }

    #[test]
    fn test_long_straddle_two_break_evens() {
        // premium 10.5 total, crossings between 89/90 and 110/111
        let c = [
            contract(OptionType::Call, Position::Long, 100.0, 0.0, 5.25),
            contract(OptionType::Put, Position::Long, 100.0, 0.0, 5.25),
        ];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        assert_eq!(result.break_even_points.as_slice(), &[90.0, 111.0]);
        assert_eq!(result.max_loss, -10.5);
        assert_eq!(result.max_profit, 9.5);
    }

    #[test]
    fn test_analyze_matches_standalone_metrics() {
        let c = [
            contract(OptionType::Call, Position::Long, 101.3, 2.1, 2.4),
            contract(OptionType::Call, Position::Short, 110.7, 0.9, 1.1),
            contract(OptionType::Put, Position::Short, 95.2, 1.7, 1.9),
        ];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        assert_eq!(result.max_profit.to_bits(), max_profit(&c).unwrap().to_bits());
        assert_eq!(result.max_loss.to_bits(), max_loss(&c).unwrap().to_bits());
        assert_eq!(result.break_even_points, break_even_points(&c).unwrap());
        assert_eq!(result.curve, compute_curve(&c).unwrap());
    }

    #[test]
    fn test_extremes_agree_with_curve() {
        let c = [
            contract(OptionType::Put, Position::Long, 40.0, 0.0, 1.25),
            contract(OptionType::Call, Position::Short, 55.0, 2.5, 0.0),
        ];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        let ys: Vec<f64> = result.curve.iter().map(|p| p.y).collect();
        let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.max_profit, hi);
        assert_eq!(result.max_loss, lo);
    }

    #[test]
    fn test_every_break_even_follows_sign_flip() {
        let c = [
            contract(OptionType::Call, Position::Long, 90.0, 0.0, 6.5),
            contract(OptionType::Call, Position::Short, 100.0, 2.5, 0.0),
            contract(OptionType::Put, Position::Long, 85.0, 0.0, 1.25),
        ];
        let result = analyze(&c, DEFAULT_MAX_SAMPLES).unwrap();
        assert!(!result.break_even_points.is_empty());
        for x in &result.break_even_points {
            let i = result.curve.iter().position(|p| p.x == *x).unwrap();
            assert!(i > 0);
            let (prev, cur) = (result.curve[i - 1].y, result.curve[i].y);
            assert!(prev * cur < 0.0, "no sign flip at {x}: {prev} -> {cur}");
        }
    }

    #[test]
    fn test_empty_curve_has_no_metrics() {
        assert!(curve_extremes(&[]).is_none());
        assert!(curve_break_evens(&[]).is_empty());
    }

    #[test]
    fn test_empty_portfolio_is_error() {
        assert!(matches!(max_profit(&[]), Err(AnalyzerError::EmptyPortfolio)));
        assert!(matches!(max_loss(&[]), Err(AnalyzerError::EmptyPortfolio)));
        assert!(matches!(break_even_points(&[]), Err(AnalyzerError::EmptyPortfolio)));
        assert!(matches!(
            analyze(&[], DEFAULT_MAX_SAMPLES),
            Err(AnalyzerError::EmptyPortfolio)
        ));
    }
}
