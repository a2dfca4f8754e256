pub mod image;
pub mod page;
pub mod temperature;
pub mod tile;

pub use image::{ImageBuffer, Rgb};
pub use page::{KindTag, PageHeader, ProcessedPage};
pub use temperature::TemperatureRange;
pub use tile::Tile;
