pub mod bank;
pub mod kernel;

pub use bank::KernelName;
pub use kernel::Kernel;
