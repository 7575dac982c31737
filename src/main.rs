// Applies the kernel bank to one grayscale image and compares each result
// with the `image` crate's filter3x3.
//
//   cargo run --release -- config.json
//
// See `ConvolveToolConfig` for the config format; `{}` runs on a seeded
// noise image. Set RUST_LOG=debug for per-call timings.
use std::env;
use std::path::Path;

use ferrite_conv::harness::{load_config, run_bank};
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let report = run_bank(&config)?;

    for entry in &report.kernels {
        match (&entry.output_stats, &entry.error) {
            (Some(stats), _) => println!(
                "{:<10} {:>2}x{:<2} {:>9.3} ms  min={:>3} max={:>3} mean={:>7.2}",
                entry.kernel.as_str(), entry.size, entry.size, entry.elapsed_ms,
                stats.min, stats.max, stats.mean
            ),
            (None, Some(err)) => println!("{:<10} skipped: {err}", entry.kernel.as_str()),
            (None, None) => println!("{:<10} empty output", entry.kernel.as_str()),
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: ferrite-conv <config.json>".to_string()
}
