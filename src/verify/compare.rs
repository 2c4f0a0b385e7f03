use crate::reference::WeightSet;

/// Default absolute-error tolerance for RTL-vs-reference comparison.
///
/// This reflects the fixed-point quantization error expected from the RTL
/// datapath, not floating-point equality. Callers may tighten or relax it;
/// the `verify` binary takes it as an optional argument.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// One verified simulator sample.
#[derive(Debug, Clone, Copy)]
pub struct PointCheck {
    pub x: f64,
    pub y_ref: f64,
    pub y_rtl: f64,
    pub error: f64,
    pub pass: bool,
}

/// Final verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    /// No records were parsed, so nothing was verified.
    Indeterminate,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub points: Vec<PointCheck>,
    pub max_error: f64,
    pub mean_error: f64,
    pub rms_error: f64,
    pub tolerance: f64,
}

impl Comparison {
    /// PASS iff at least one record was verified and the max error is
    /// strictly below the tolerance.
    pub fn verdict(&self) -> Verdict {
        if self.points.is_empty() {
            Verdict::Indeterminate
        } else if self.max_error < self.tolerance {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Evaluates the reference model at each simulator input and aggregates the
/// absolute errors. Per-point pass/fail uses the same strict-less-than rule
/// as the overall verdict.
pub fn compare(weights: &WeightSet, rtl_results: &[(f64, f64)], tolerance: f64) -> Comparison {
    let points: Vec<PointCheck> = rtl_results
        .iter()
        .map(|&(x, y_rtl)| {
            let y_ref = weights.forward(x);
            let error = (y_ref - y_rtl).abs();
            PointCheck {
                x,
                y_ref,
                y_rtl,
                error,
                pass: error < tolerance,
            }
        })
        .collect();

    let n = points.len() as f64;
    let (max_error, sum, sum_sq) = points.iter().fold((0.0_f64, 0.0, 0.0), |(mx, s, sq), p| {
        (mx.max(p.error), s + p.error, sq + p.error * p.error)
    });

    let (mean_error, rms_error) = if points.is_empty() {
        (0.0, 0.0)
    } else {
        (sum / n, (sum_sq / n).sqrt())
    };

    Comparison {
        points,
        max_error,
        mean_error,
        rms_error,
        tolerance,
    }
}
