use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix, // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Weights are Xavier-initialized from the supplied rng; biases start at
    /// zero. Weight layout is (input_size, size): `weights.data[i][j]` feeds
    /// input `i` into neuron `j`.
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::xavier(input_size, size, rng),
            biases: Matrix::zeros(1, size),
            activator: activation,
        }
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(&self, next_layer_delta: Matrix, inputs: &Matrix) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // Element-wise (Hadamard) product: δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.zip(&act_derivative, |e, d| e * d);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn feed_from_applies_linear_transform_then_activation() {
        let mut layer = Layer::new(1, 1, ActivationFunction::Tanh, &mut StdRng::seed_from_u64(0));
        layer.weights = Matrix::from_data(vec![vec![2.0]]);
        layer.biases = Matrix::from_data(vec![vec![0.5]]);

        let out = layer.feed_from(vec![1.0]);
        assert!((out[0] - 2.5_f64.tanh()).abs() < 1e-15);
    }

    #[test]
    fn identity_layer_gradient_is_input_times_delta() {
        let mut layer = Layer::new(
            1,
            2,
            ActivationFunction::Identity,
            &mut StdRng::seed_from_u64(0),
        );
        let input = vec![3.0, -1.0];
        layer.feed_from(input.clone());

        let delta = Matrix::from_data(vec![vec![0.5]]);
        let (w_grad, b_grad) = layer.compute_gradients(delta, &Matrix::from_data(vec![input]));

        assert_eq!(w_grad.data, vec![vec![1.5], vec![-0.5]]);
        assert_eq!(b_grad.data, vec![vec![0.5]]);
    }
}
