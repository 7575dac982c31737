use std::fmt;

use serde::{Serialize, Deserialize};

use crate::kernel::kernel::Kernel;

/// The illustrative kernels applied by the convolution harness.
///
/// Serialized in snake_case so configs can list them by name
/// (`"sobel_x"`, `"large_blur"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelName {
    /// 7×7 box average.
    SmallBlur,
    /// 21×21 box average.
    LargeBlur,
    Sharpen,
    /// 4-neighbour Laplacian, responds to edge-like regions.
    Laplacian,
    /// Horizontal gradient (responds to vertical edges).
    SobelX,
    /// Vertical gradient (responds to horizontal edges).
    SobelY,
    Emboss,
    /// 3×3 pass-through, useful as a sanity check.
    Identity,
}

type Kernel3 = [[f64; 3]; 3];

const SHARPEN: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];
const LAPLACIAN: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
const EMBOSS: Kernel3 = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];
const IDENTITY: Kernel3 = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

impl KernelName {
    /// The bank in the order the harness applies it. `Identity` is left out.
    pub const BANK: [KernelName; 7] = [
        KernelName::SmallBlur,
        KernelName::LargeBlur,
        KernelName::Sharpen,
        KernelName::Laplacian,
        KernelName::SobelX,
        KernelName::SobelY,
        KernelName::Emboss,
    ];

    pub fn all() -> &'static [KernelName] {
        &Self::BANK
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KernelName::SmallBlur => "small_blur",
            KernelName::LargeBlur => "large_blur",
            KernelName::Sharpen => "sharpen",
            KernelName::Laplacian => "laplacian",
            KernelName::SobelX => "sobel_x",
            KernelName::SobelY => "sobel_y",
            KernelName::Emboss => "emboss",
            KernelName::Identity => "identity",
        }
    }

    /// Side length of the kernel this name builds.
    pub fn size(&self) -> usize {
        match self {
            KernelName::SmallBlur => 7,
            KernelName::LargeBlur => 21,
            _ => 3,
        }
    }

    /// Builds the literal weight matrix.
    pub fn kernel(&self) -> Kernel {
        match self {
            KernelName::SmallBlur | KernelName::LargeBlur => {
                let size = self.size();
                Kernel::uniform(size, 1.0 / (size * size) as f64)
            }
            KernelName::Sharpen => Kernel::literal(SHARPEN),
            KernelName::Laplacian => Kernel::literal(LAPLACIAN),
            KernelName::SobelX => Kernel::literal(SOBEL_X),
            KernelName::SobelY => Kernel::literal(SOBEL_Y),
            KernelName::Emboss => Kernel::literal(EMBOSS),
            KernelName::Identity => Kernel::literal(IDENTITY),
        }
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
