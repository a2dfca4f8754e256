pub mod constants;
pub mod filename;
pub mod geodetic;
pub mod palette;
pub mod progress;

pub use constants::*;
pub use filename::output_image_path;
pub use palette::generate_palette;
pub use progress::ProgressReporter;
