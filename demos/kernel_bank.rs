/// Prints every kernel in the bank and its response on a tiny test pattern.
///
/// Run with:
///   cargo run --example kernel_bank
use ferrite_conv::{convolve_raw, convolve_with, Image, KernelName, RescaleMode};

fn main() {
    // 9×9 dark square with a bright 3×3 block in the middle.
    let mut img = Image::filled(9, 9, 20u8);
    for y in 3..6 {
        for x in 3..6 {
            img.set(y, x, 220);
        }
    }

    for &name in KernelName::all().iter().chain([KernelName::Identity].iter()) {
        let kernel = name.kernel();
        println!("== {name} ({0}x{0}, sum {1:.3})", kernel.size(), kernel.sum());
        if kernel.size() <= 3 {
            for i in 0..kernel.size() {
                println!("   {:?}", kernel.row(i));
            }
        }

        match convolve_raw(&img, &kernel) {
            Ok(raw) => {
                let row = raw.row(4);
                println!("   raw middle row:   {:?}", row.iter().map(|v| v.round() as i64).collect::<Vec<_>>());
            }
            Err(e) => {
                println!("   skipped: {e}");
                continue;
            }
        }
        for mode in [RescaleMode::Fixed, RescaleMode::MinMax] {
            if let Ok(out) = convolve_with(&img, &kernel, mode) {
                println!("   {:<17} {:?}", format!("{mode:?} middle row:"), out.row(4));
            }
        }
    }
}
