use std::path::PathBuf;

/// Build the output path for one tile image: `{prefix}_output_{index}.png`.
pub fn output_image_path(prefix: &str, image_index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}_output_{image_index}.png"))
}
