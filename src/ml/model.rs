use burn::{
    nn::{
        loss::{MseLoss, Reduction},
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::activation,
};
use serde::{Deserialize, Serialize};

/// Activation applied after the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputActivation {
    /// Squash into (0, 1); pairs with a label scaled by the ring ratio
    Sigmoid,
    /// Identity; pairs with the raw ring count
    Linear,
}

// #[derive(Config)] brings its own Clone + Serialize/Deserialize impls.
#[derive(Config, Debug)]
pub struct FeedForwardConfig {
    pub input_size:   usize,
    /// Width of each hidden layer, in order; every hidden layer is sigmoid
    pub hidden_sizes: Vec<usize>,
    #[config(default = 1)]
    pub output_size:  usize,
    #[config(default = "OutputActivation::Linear")]
    pub output_activation: OutputActivation,
}

impl FeedForwardConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> FeedForward<B> {
        let mut hidden = Vec::with_capacity(self.hidden_sizes.len());
        let mut fan_in = self.input_size;
        for &width in &self.hidden_sizes {
            hidden.push(LinearConfig::new(fan_in, width).init(device));
            fan_in = width;
        }
        let output = LinearConfig::new(fan_in, self.output_size).init(device);

        FeedForward {
            hidden,
            output,
            sigmoid_output: self.output_activation == OutputActivation::Sigmoid,
        }
    }
}

/// Dense layers with sigmoid hidden activations.
#[derive(Module, Debug)]
pub struct FeedForward<B: Backend> {
    pub hidden:         Vec<Linear<B>>,
    pub output:         Linear<B>,
    pub sigmoid_output: bool,
}

impl<B: Backend> FeedForward<B> {
    /// inputs: [batch, input_size] → [batch, output_size]
    pub fn forward(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = inputs;
        for layer in &self.hidden {
            x = activation::sigmoid(layer.forward(x));
        }
        let y = self.output.forward(x);
        if self.sigmoid_output {
            activation::sigmoid(y)
        } else {
            y
        }
    }

    /// Mean squared error between the prediction and `targets`.
    pub fn forward_loss(&self, inputs: Tensor<B, 2>, targets: Tensor<B, 2>) -> Tensor<B, 1> {
        let predicted = self.forward(inputs);
        MseLoss::new().forward(predicted, targets, Reduction::Mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{ndarray::NdArrayDevice, NdArray};

    type TestBackend = NdArray;

    #[test]
    fn test_output_shape() {
        let device = NdArrayDevice::default();
        let model: FeedForward<TestBackend> =
            FeedForwardConfig::new(8, vec![16]).init(&device);

        let out = model.forward(Tensor::zeros([5, 8], &device));
        assert_eq!(out.dims(), [5, 1]);
        assert_eq!(model.hidden.len(), 1);
    }

    #[test]
    fn test_sigmoid_output_is_bounded() {
        let device = NdArrayDevice::default();
        let model: FeedForward<TestBackend> = FeedForwardConfig::new(4, vec![3, 3])
            .with_output_activation(OutputActivation::Sigmoid)
            .init(&device);

        let out: Vec<f32> = model
            .forward(Tensor::ones([3, 4], &device).mul_scalar(100.0))
            .into_data()
            .to_vec()
            .unwrap();
        assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_loss_is_zero_on_perfect_prediction() {
        let device = NdArrayDevice::default();
        let model: FeedForward<TestBackend> = FeedForwardConfig::new(2, vec![2]).init(&device);
        let inputs = Tensor::<TestBackend, 2>::zeros([2, 2], &device);
        let targets = model.forward(inputs.clone());

        let loss: f64 = model.forward_loss(inputs, targets).into_scalar().elem();
        assert!(loss.abs() < 1e-12);
    }
}
