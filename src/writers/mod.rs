pub mod csv_writer;
pub mod png_writer;

pub use csv_writer::write_telemetry;
pub use png_writer::write_png;
