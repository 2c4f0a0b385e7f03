use serde::{Deserialize, Serialize};

/// Flat, named parameter set for the 1→2→3→1 boxcar topology.
///
/// `W<layer>_<neuron><input>` is the weight feeding hidden/output neuron
/// `<neuron>` from input `<input>` of that layer; `b<layer>_<neuron>` is the
/// matching bias. The naming is shared by the hand-specified true set, the
/// learned set exported after training, and the RTL verification oracle, so
/// all three can be compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub w1_11: f64,
    pub w1_21: f64,
    pub b1_1: f64,
    pub b1_2: f64,
    pub w2_11: f64,
    pub w2_12: f64,
    pub w2_21: f64,
    pub w2_22: f64,
    pub w2_31: f64,
    pub w2_32: f64,
    pub b2_1: f64,
    pub b2_2: f64,
    pub b2_3: f64,
    pub w3_11: f64,
    pub w3_12: f64,
    pub w3_13: f64,
    pub b3_1: f64,
}

/// Hand-specified parameters that make the network a smooth boxcar pulse.
pub const TRUE_WEIGHTS: WeightSet = WeightSet {
    w1_11: 7.0,
    w1_21: -5.0,
    b1_1: 5.0,
    b1_2: 5.0,
    w2_11: 1.0,
    w2_12: 1.0,
    w2_21: 1.0,
    w2_22: 1.0,
    w2_31: 3.0,
    w2_32: -3.0,
    b2_1: 0.5,
    b2_2: 0.5,
    b2_3: -2.0,
    w3_11: 2.0,
    w3_12: 2.0,
    w3_13: 3.0,
    b3_1: 0.0,
};

impl WeightSet {
    /// Reference forward pass: two tanh hidden layers, linear output.
    /// Pure; the ground truth for both training and RTL verification.
    pub fn forward(&self, x: f64) -> f64 {
        let h1_1 = (self.w1_11 * x + self.b1_1).tanh();
        let h1_2 = (self.w1_21 * x + self.b1_2).tanh();
        let h2_1 = (self.w2_11 * h1_1 + self.w2_12 * h1_2 + self.b2_1).tanh();
        let h2_2 = (self.w2_21 * h1_1 + self.w2_22 * h1_2 + self.b2_2).tanh();
        let h2_3 = (self.w2_31 * h1_1 + self.w2_32 * h1_2 + self.b2_3).tanh();
        self.w3_11 * h2_1 + self.w3_12 * h2_2 + self.w3_13 * h2_3 + self.b3_1
    }

    /// Element-wise application of [`WeightSet::forward`]; numerically
    /// identical to calling the scalar version per element.
    pub fn forward_slice(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.forward(x)).collect()
    }

    /// Stable (name, value) pairs in layer order, for reports and diffs.
    pub fn named(&self) -> [(&'static str, f64); 17] {
        [
            ("W1_11", self.w1_11),
            ("W1_21", self.w1_21),
            ("b1_1", self.b1_1),
            ("b1_2", self.b1_2),
            ("W2_11", self.w2_11),
            ("W2_12", self.w2_12),
            ("W2_21", self.w2_21),
            ("W2_22", self.w2_22),
            ("W2_31", self.w2_31),
            ("W2_32", self.w2_32),
            ("b2_1", self.b2_1),
            ("b2_2", self.b2_2),
            ("b2_3", self.b2_3),
            ("W3_11", self.w3_11),
            ("W3_12", self.w3_12),
            ("W3_13", self.w3_13),
            ("b3_1", self.b3_1),
        ]
    }

    /// Serializes the weight set to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_at_zero_matches_closed_form() {
        // At x = 0 both first-layer neurons see only their bias (5.0), so the
        // whole expression collapses to 4·tanh(2·tanh(5) + 0.5) + 3·tanh(-2).
        let t = 5.0_f64.tanh();
        let expected = 4.0 * (2.0 * t + 0.5).tanh() + 3.0 * (-2.0_f64).tanh();
        assert!((TRUE_WEIGHTS.forward(0.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn slice_application_is_bit_identical_to_scalar() {
        let xs = [-3.0, -1.5, 0.0, 0.25, 2.9];
        let ys = TRUE_WEIGHTS.forward_slice(&xs);
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(y, TRUE_WEIGHTS.forward(x));
        }
    }

    #[test]
    fn left_tail_saturates_to_its_plateau() {
        // Far left both hidden layers are saturated: h1 = (-1, +1), so the
        // output settles at 4·tanh(0.5) - 3·tanh(8).
        let expected = 4.0 * 0.5_f64.tanh() - 3.0 * 8.0_f64.tanh();
        assert!((TRUE_WEIGHTS.forward(-6.0) - expected).abs() < 1e-3);
    }

    #[test]
    fn named_exposes_all_seventeen_parameters_in_order() {
        let named = TRUE_WEIGHTS.named();
        assert_eq!(named.len(), 17);
        assert_eq!(named[0], ("W1_11", 7.0));
        assert_eq!(named[16], ("b3_1", 0.0));
    }
}
