use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::{Clock, ReportTimestamp, Result};
use crate::modules::reports::models::SalesReport;
use crate::modules::reports::repositories::SalesRepository;
use crate::modules::reports::services::report_file::ReportFile;
use crate::modules::reports::services::report_writer::ReportWriter;

/// Result of one report run
#[derive(Debug)]
pub struct ReportOutcome {
    /// Path of the written report file
    pub path: PathBuf,
    /// Metrics as written into the file
    pub report: SalesReport,
}

/// Service producing the sales report
///
/// Runs the five metric queries in order and formats each section as soon as
/// its query returns. The first failing query aborts the run: no retry, no
/// report with missing sections.
pub struct ReportService<R> {
    repo: R,
}

impl<R: SalesRepository> ReportService<R> {
    /// Create a new report service
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Give the repository back, e.g. to close its connection
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Generate one report file under `output_dir`
    ///
    /// The timestamp is captured once from `clock` and used for both the file
    /// name and the header.
    ///
    /// # Errors
    /// Returns error if the output file cannot be created or written, or if
    /// any query fails. The file may then be left partially written.
    pub async fn generate(&mut self, clock: &dyn Clock, output_dir: &Path) -> Result<ReportOutcome> {
        let generated_at = clock.report_timestamp();
        let file = ReportFile::create(output_dir, &generated_at)?;

        info!(path = %file.path.display(), generated_at = %generated_at.display(), "Writing sales report");

        let report = self.write_report(file.writer, generated_at).await?;

        if report.is_empty() {
            warn!("No non-cancelled sale found, report only holds zeros and placeholders");
        }
        match report.to_json() {
            Ok(summary) => debug!(%summary, "Report summary"),
            Err(e) => warn!(error = %e, "Could not serialize report summary"),
        }

        Ok(ReportOutcome {
            path: file.path,
            report,
        })
    }

    /// Query every metric and stream the formatted report into `out`
    pub async fn write_report<W: Write>(
        &mut self,
        out: W,
        generated_at: ReportTimestamp,
    ) -> Result<SalesReport> {
        let mut writer = ReportWriter::new(out);
        writer.header(&generated_at)?;

        let total_revenue = self.repo.total_revenue().await?;
        info!(%total_revenue, "Total revenue computed");
        writer.total_revenue(total_revenue)?;

        let average_order_value = self.repo.average_order_value().await?;
        info!(%average_order_value, "Average order value computed");
        writer.average_order_value(average_order_value)?;

        let top_product = self.repo.top_product().await?;
        match &top_product {
            Some(p) => info!(product = %p.name, quantity = p.total_quantity, "Top product computed"),
            None => warn!("No order items found, writing top product placeholder"),
        }
        writer.top_product(top_product.as_ref())?;

        let top_customers = self.repo.top_customers().await?;
        if top_customers.is_empty() {
            warn!("No customer with non-cancelled orders");
        } else {
            info!(count = top_customers.len(), "Top customers computed");
        }
        writer.top_customers(&top_customers)?;

        let category_revenue = self.repo.revenue_by_category().await?;
        if category_revenue.is_empty() {
            warn!("No category revenue found");
        } else {
            info!(count = category_revenue.len(), "Revenue by category computed");
        }
        writer.revenue_by_category(&category_revenue)?;

        writer.flush()?;

        Ok(SalesReport {
            generated_at,
            total_revenue,
            average_order_value,
            top_product,
            top_customers,
            category_revenue,
        })
    }
}

// Tests driving this service with an in-memory repository live in
// tests/unit/report_rendering_test.rs and tests/integration/report_generation_test.rs
