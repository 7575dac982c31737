use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::convolve::{convolve_par_with, convolve_with};
use crate::harness::config::ConvolveToolConfig;
use crate::harness::report::{BankReport, IntensityStats, KernelReport};
use crate::image::io::{load_grayscale, save_grayscale, write_json_file};
use crate::image::Image;
use crate::reference::compare_with_library;

/// Loads (or synthesizes) the input image described by `config`.
pub fn load_input(config: &ConvolveToolConfig) -> Result<Image<u8>, String> {
    match &config.input {
        Some(path) => {
            info!("loading {}", path.display());
            let gray = load_grayscale(path)?;
            Ok(Image::from_gray(&gray))
        }
        None => {
            let s = &config.synthetic;
            info!("no input given, using {}x{} noise (seed {})", s.width, s.height, s.seed);
            Ok(Image::random(s.height, s.width, &mut StdRng::seed_from_u64(s.seed)))
        }
    }
}

/// Applies every configured kernel to the input image.
///
/// A kernel that cannot be applied (e.g. image smaller than the kernel) is
/// logged and recorded in the report; the remaining kernels still run.
/// I/O failures abort the run.
pub fn run_bank(config: &ConvolveToolConfig) -> Result<BankReport, String> {
    let image = load_input(config)?;
    let gray = image.to_gray();

    if let Some(dir) = &config.output.dir {
        save_grayscale(&image, &dir.join("original.png"))?;
    }

    let mut kernels = Vec::new();
    for name in config.kernel_names() {
        info!("applying {name} kernel");
        let kernel = name.kernel();

        let started = Instant::now();
        let result = if config.parallel {
            convolve_par_with(&image, &kernel, config.rescale)
        } else {
            convolve_with(&image, &kernel, config.rescale)
        };
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let entry = match result {
            Ok(output) => {
                let reference = compare_with_library(&gray, &kernel, &output);
                match &reference {
                    Some(diff) => info!(
                        "{name}: library filter3x3 mean |diff| = {:.4}, max = {}",
                        diff.mean_abs_diff, diff.max_abs_diff
                    ),
                    None => debug!("{name}: no library reference for this kernel"),
                }
                if let Some(dir) = &config.output.dir {
                    save_grayscale(&output, &dir.join(format!("{name}.png")))?;
                }
                KernelReport {
                    kernel: name,
                    size: kernel.size(),
                    elapsed_ms,
                    output_stats: IntensityStats::of(output.as_slice()),
                    reference,
                    error: None,
                }
            }
            Err(err) => {
                warn!("{name}: {err}");
                KernelReport {
                    kernel: name,
                    size: kernel.size(),
                    elapsed_ms,
                    output_stats: None,
                    reference: None,
                    error: Some(err.to_string()),
                }
            }
        };
        kernels.push(entry);
    }

    let report = BankReport {
        width: image.width(),
        height: image.height(),
        rescale: config.rescale,
        parallel: config.parallel,
        kernels,
    };
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        info!("report written to {}", path.display());
    }
    Ok(report)
}
