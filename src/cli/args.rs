use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slg2png")]
#[command(about = "Convert Lowrance SLG echogram data to false-color PNG images")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'f', long, help = "SLG file to process")]
    pub input: PathBuf,

    #[arg(
        short = 't',
        long = "pages",
        default_value_t = 5000,
        help = "Total echogram pages to process"
    )]
    pub page_count: usize,

    #[arg(
        short = 's',
        long = "start",
        default_value_t = 0,
        help = "Page offset into the SLG file to start processing"
    )]
    pub start_page: usize,

    #[arg(
        short = 'x',
        long = "max-image-pages",
        default_value_t = 500,
        help = "Maximum echogram pages per output image (0 = divide the range among workers)"
    )]
    pub max_image_pages: usize,

    #[arg(
        short = 'p',
        long,
        default_value = "",
        help = "Prefix for output image filenames"
    )]
    pub prefix: String,

    #[arg(short = 'd', long = "csv", help = "Write page telemetry to a CSV file")]
    pub csv_output: Option<PathBuf>,

    #[arg(long, default_value_t = 4, help = "Worker threads processing tiles")]
    pub workers: usize,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, hide = true, help = "Suppress progress bars")]
    pub quiet: bool,
}
