pub mod range_scanner;
pub mod record_decoder;
pub mod slg_file;

pub use range_scanner::PageScan;
pub use record_decoder::{decode_header, decode_page, DecodedPage};
pub use slg_file::{FileHeader, SlgFile};
