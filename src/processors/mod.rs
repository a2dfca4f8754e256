pub mod scheduler;
pub mod synthesizer;

pub use scheduler::TileScheduler;
pub use synthesizer::ImageSynthesizer;
