pub mod image;
pub mod io;

pub use self::image::{Image, Sample};
