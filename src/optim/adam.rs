use crate::{layers::dense::Layer, math::matrix::Matrix, network::network::Network};

/// Per-layer first and second moment estimates.
struct Moments {
    m_w: Matrix,
    v_w: Matrix,
    m_b: Matrix,
    v_b: Matrix,
}

/// Adam optimizer with per-parameter adaptive step sizes.
///
/// Moment state is allocated up front from the network's layer shapes; the
/// timestep advances once per [`Adam::begin_step`] so all layers in one
/// update share the same bias correction.
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    t: usize,
    state: Vec<Moments>,
}

impl Adam {
    pub fn new(learning_rate: f64, network: &Network) -> Adam {
        let state = network
            .layers
            .iter()
            .map(|layer| Moments {
                m_w: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                v_w: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                m_b: Matrix::zeros(layer.biases.rows, layer.biases.cols),
                v_b: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            })
            .collect();

        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            t: 0,
            state,
        }
    }

    /// Advances the shared timestep. Call once per full-network update,
    /// before the per-layer `step` calls.
    pub fn begin_step(&mut self) {
        self.t += 1;
    }

    /// Applies one Adam update to `layer` given its averaged gradients.
    pub fn step(&mut self, layer_idx: usize, layer: &mut Layer, w_grad: Matrix, b_grad: Matrix) {
        let moments = &mut self.state[layer_idx];

        let (m_w, v_w, w_step) = Self::update(
            &moments.m_w,
            &moments.v_w,
            &w_grad,
            self.t,
            self.learning_rate,
            self.beta1,
            self.beta2,
            self.epsilon,
        );
        let (m_b, v_b, b_step) = Self::update(
            &moments.m_b,
            &moments.v_b,
            &b_grad,
            self.t,
            self.learning_rate,
            self.beta1,
            self.beta2,
            self.epsilon,
        );

        moments.m_w = m_w;
        moments.v_w = v_w;
        moments.m_b = m_b;
        moments.v_b = v_b;

        layer.weights = layer.weights.clone() - w_step;
        layer.biases = layer.biases.clone() - b_step;
    }

    /// One moment update for a single parameter matrix.
    /// Returns (new_m, new_v, step) where step already includes the learning
    /// rate and bias correction.
    #[allow(clippy::too_many_arguments)]
    fn update(
        m: &Matrix,
        v: &Matrix,
        grad: &Matrix,
        t: usize,
        lr: f64,
        beta1: f64,
        beta2: f64,
        epsilon: f64,
    ) -> (Matrix, Matrix, Matrix) {
        let new_m = m.zip(grad, |m_i, g| beta1 * m_i + (1.0 - beta1) * g);
        let new_v = v.zip(grad, |v_i, g| beta2 * v_i + (1.0 - beta2) * g * g);

        let bias1 = 1.0 - beta1.powi(t as i32);
        let bias2 = 1.0 - beta2.powi(t as i32);

        let step = new_m.zip(&new_v, |m_i, v_i| {
            let m_hat = m_i / bias1;
            let v_hat = v_i / bias2;
            lr * m_hat / (v_hat.sqrt() + epsilon)
        });

        (new_m, new_v, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn step_moves_parameters_against_the_gradient() {
        let mut net = Network::boxcar(&mut StdRng::seed_from_u64(1));
        let mut adam = Adam::new(0.05, &net);

        let before = net.layers[0].weights.data[0][0];
        let w_grad = net.layers[0].weights.map(|_| 1.0);
        let b_grad = net.layers[0].biases.map(|_| 1.0);

        adam.begin_step();
        adam.step(0, &mut net.layers[0], w_grad, b_grad);

        // Positive gradient must decrease the parameter; the first bias-
        // corrected step equals the learning rate (up to epsilon).
        let after = net.layers[0].weights.data[0][0];
        assert!(after < before);
        assert!((before - after - 0.05).abs() < 1e-6);
    }

    #[test]
    fn repeated_steps_descend_a_quadratic() {
        // Minimize (w - 3)² on a 1×1 layer by feeding Adam its gradient.
        let mut net = Network::new(
            vec![(1, 1, crate::ActivationFunction::Identity)],
            &mut StdRng::seed_from_u64(2),
        );
        let mut adam = Adam::new(0.1, &net);

        for _ in 0..500 {
            let w = net.layers[0].weights.data[0][0];
            let grad = Matrix::from_data(vec![vec![2.0 * (w - 3.0)]]);
            let b_grad = Matrix::zeros(1, 1);
            adam.begin_step();
            adam.step(0, &mut net.layers[0], grad, b_grad);
        }

        assert!((net.layers[0].weights.data[0][0] - 3.0).abs() < 1e-2);
    }
}
