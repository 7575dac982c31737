use thiserror::Error;

/// Precondition failures of the convolution engine.
///
/// Every variant is detected before the scan starts, so a failed call never
/// produces a partial output image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvolutionError {
    /// Kernel is empty, ragged, non-square, or has an even side length.
    #[error("kernel must be square with an odd side length, got {rows}x{cols}")]
    InvalidKernelShape { rows: usize, cols: usize },

    /// Image has fewer rows or columns than the kernel side length.
    #[error("image {height}x{width} is smaller than the {kernel}x{kernel} kernel")]
    ImageTooSmall {
        height: usize,
        width: usize,
        kernel: usize,
    },

    /// Raw sample buffer length does not match `height * width`.
    #[error("sample buffer holds {actual} values, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Failures of [`Perceptron`](crate::perceptron::Perceptron) training and prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerceptronError {
    #[error("sample has {actual} features, perceptron expects {expected}")]
    InputWidth { expected: usize, actual: usize },

    #[error("{inputs} samples but {targets} targets")]
    SampleCount { inputs: usize, targets: usize },

    #[error("training set is empty")]
    EmptyDataset,
}
