pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

/// Root-mean-square error over paired slices.
pub fn rmse(predicted: &[f64], expected: &[f64]) -> f64 {
    MseLoss::loss(predicted, expected).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_and_rmse_on_a_known_pair() {
        let p = [1.0, 3.0];
        let e = [0.0, 1.0];
        assert!((MseLoss::loss(&p, &e) - 2.5).abs() < 1e-15);
        assert!((rmse(&p, &e) - 2.5_f64.sqrt()).abs() < 1e-15);
        assert_eq!(MseLoss::derivative(&p, &e), vec![1.0, 2.0]);
    }
}
