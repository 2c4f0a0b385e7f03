use crate::{
    activation::activation::ActivationFunction, layers::dense::Layer, reference::WeightSet,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new<R: Rng>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Network {
        let layers = layer_specs
            .into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Network { layers }
    }

    /// The fixed boxcar topology: Input(1) → Hidden1(2) → Hidden2(3) → Output(1),
    /// tanh on both hidden layers, linear output.
    pub fn boxcar<R: Rng>(rng: &mut R) -> Network {
        Network::new(
            vec![
                (2, 1, ActivationFunction::Tanh),
                (3, 2, ActivationFunction::Tanh),
                (1, 3, ActivationFunction::Identity),
            ],
            rng,
        )
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Scalar convenience wrapper around [`Network::forward`] for the 1-input
    /// 1-output boxcar topology.
    pub fn predict(&mut self, x: f64) -> f64 {
        self.forward(vec![x])[0]
    }

    /// Extracts the current parameter values into the named scheme shared
    /// with [`crate::reference::TRUE_WEIGHTS`].
    ///
    /// Weight layout reminder: `layers[l].weights.data[i][j]` feeds layer
    /// input `i` into neuron `j`, so `W<l>_<n><i>` lives at `data[i-1][n-1]`.
    ///
    /// # Panics
    /// Panics if the network is not the 1→2→3→1 boxcar topology.
    pub fn export_weights(&self) -> WeightSet {
        assert_eq!(self.layers.len(), 3, "boxcar network has three layers");
        let (l1, l2, l3) = (&self.layers[0], &self.layers[1], &self.layers[2]);
        assert_eq!((l1.weights.rows, l1.weights.cols), (1, 2));
        assert_eq!((l2.weights.rows, l2.weights.cols), (2, 3));
        assert_eq!((l3.weights.rows, l3.weights.cols), (3, 1));

        WeightSet {
            w1_11: l1.weights.data[0][0],
            w1_21: l1.weights.data[0][1],
            b1_1: l1.biases.data[0][0],
            b1_2: l1.biases.data[0][1],
            w2_11: l2.weights.data[0][0],
            w2_12: l2.weights.data[1][0],
            w2_21: l2.weights.data[0][1],
            w2_22: l2.weights.data[1][1],
            w2_31: l2.weights.data[0][2],
            w2_32: l2.weights.data[1][2],
            b2_1: l2.biases.data[0][0],
            b2_2: l2.biases.data[0][1],
            b2_3: l2.biases.data[0][2],
            w3_11: l3.weights.data[0][0],
            w3_12: l3.weights.data[1][0],
            w3_13: l3.weights.data[2][0],
            b3_1: l3.biases.data[0][0],
        }
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use crate::reference::TRUE_WEIGHTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Loads the true weight set into a freshly constructed boxcar network.
    fn network_with_true_weights() -> Network {
        let mut net = Network::boxcar(&mut StdRng::seed_from_u64(0));
        let w = TRUE_WEIGHTS;
        net.layers[0].weights = Matrix::from_data(vec![vec![w.w1_11, w.w1_21]]);
        net.layers[0].biases = Matrix::from_data(vec![vec![w.b1_1, w.b1_2]]);
        net.layers[1].weights = Matrix::from_data(vec![
            vec![w.w2_11, w.w2_21, w.w2_31],
            vec![w.w2_12, w.w2_22, w.w2_32],
        ]);
        net.layers[1].biases = Matrix::from_data(vec![vec![w.b2_1, w.b2_2, w.b2_3]]);
        net.layers[2].weights = Matrix::from_data(vec![vec![w.w3_11], vec![w.w3_12], vec![w.w3_13]]);
        net.layers[2].biases = Matrix::from_data(vec![vec![w.b3_1]]);
        net
    }

    #[test]
    fn export_weights_round_trips_the_named_scheme() {
        let net = network_with_true_weights();
        assert_eq!(net.export_weights(), TRUE_WEIGHTS);
    }

    #[test]
    fn network_with_true_weights_matches_reference_forward() {
        let mut net = network_with_true_weights();
        for x in [-3.0, -0.5, 0.0, 1.25, 3.0] {
            assert!((net.predict(x) - TRUE_WEIGHTS.forward(x)).abs() < 1e-12);
        }
    }
}
