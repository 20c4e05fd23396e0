pub mod models;
pub mod repositories;
pub mod services;

pub use models::SalesReport;
pub use repositories::{PgSalesRepository, SalesRepository};
pub use services::{ReportOutcome, ReportService};
