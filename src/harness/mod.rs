//! Driver behind the `ferrite-conv` binary: load an image, run the kernel
//! bank, compare with the library filter, write PNGs and a JSON report.

pub mod config;
pub mod report;
pub mod run;

pub use config::{load_config, ConvolveToolConfig};
pub use report::{BankReport, KernelReport};
pub use run::run_bank;
