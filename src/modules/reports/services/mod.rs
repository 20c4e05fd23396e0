pub mod report_file;
pub mod report_service;
pub mod report_writer;

pub use report_file::ReportFile;
pub use report_service::{ReportOutcome, ReportService};
pub use report_writer::{ReportWriter, NO_PRODUCT_PLACEHOLDER};
