pub mod error;
pub mod image;
pub mod kernel;
pub mod convolve;
pub mod reference;
pub mod perceptron;
pub mod harness;

// Convenience re-exports
pub use crate::error::{ConvolutionError, PerceptronError};
pub use crate::image::image::{Image, Sample};
pub use crate::kernel::kernel::Kernel;
pub use crate::kernel::bank::KernelName;
pub use crate::convolve::convolve::{convolve, convolve_raw, convolve_with};
pub use crate::convolve::parallel::convolve_par;
pub use crate::convolve::rescale::RescaleMode;
pub use crate::perceptron::perceptron::Perceptron;
