use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::{ImageSynthesizer, TileScheduler};
use crate::readers::{range_scanner, SlgFile};
use crate::utils::output_image_path;
use crate::utils::palette::generate_palette;
use crate::utils::progress::ProgressReporter;
use crate::writers;
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let slg = SlgFile::open(&cli.input)?;
    let header = slg.file_header()?;
    debug!(
        page_size = header.page_size,
        tag = ?header.tag,
        "stream header"
    );

    let (start_page, total_pages) = slg.resolve_range(cli.start_page, cli.page_count)?;
    info!(
        input = %cli.input.display(),
        pages_in_file = slg.page_count(),
        start_page,
        total_pages,
        "processing"
    );

    // Pre-scan publishes the per-page telemetry and the global temperature
    // range before any tile worker starts.
    let spinner = ProgressReporter::new_spinner("Scanning page headers...", cli.quiet);
    let scan = range_scanner::scan(slg.data(), start_page, total_pages)?;
    spinner.finish_with_message(&format!("Scanned {} page headers", scan.pages.len()));

    if let Some(ref csv_path) = cli.csv_output {
        writers::write_telemetry(csv_path, &scan.pages)?;
    }

    let palette = generate_palette();
    let scheduler = TileScheduler::new(cli.workers).with_max_image_pages(cli.max_image_pages);
    let tiles = scheduler.partition(start_page, total_pages);

    let synthesizer = ImageSynthesizer::new(
        slg.data(),
        &scan.pages,
        &scan.range,
        &palette,
        start_page,
    );

    let progress = ProgressReporter::new(tiles.len() as u64, "Rendering tiles...", cli.quiet);
    scheduler.run(&tiles, |tile| {
        let image = synthesizer.synthesize(tile)?;
        writers::write_png(&image, &output_image_path(&cli.prefix, tile.image_index))?;
        progress.increment(1);
        Ok(())
    })?;
    progress.finish_with_message(&format!("Wrote {} images", tiles.len()));

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Ignore re-initialization when run() is invoked more than once in-process.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
