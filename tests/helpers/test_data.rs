// In-memory test data
//
// Provides a SalesRepository that returns canned metric values so the report
// pipeline can be tested without a database.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use supershop_report::core::{AppError, FixedClock, Result};
use supershop_report::reports::models::{CategoryRevenue, CustomerSpend, ProductSales};
use supershop_report::reports::SalesRepository;

/// Metric at which `InMemorySalesRepository` fails, to exercise abort paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalRevenue,
    AverageOrderValue,
    TopProduct,
    TopCustomers,
    RevenueByCategory,
}

/// Canned metric values plus a record of which queries ran
#[derive(Debug, Clone, Default)]
pub struct InMemorySalesRepository {
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    pub top_product: Option<ProductSales>,
    pub top_customers: Vec<CustomerSpend>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub fail_at: Option<Metric>,
    pub calls: Vec<Metric>,
}

impl InMemorySalesRepository {
    /// Store with no sales at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// One valid order (2 × 10.00 + 1 × 5.00) and one cancelled order
    /// (5 × 100.00) on a different product
    pub fn single_order_scenario() -> Self {
        Self {
            total_revenue: dec!(25.00),
            average_order_value: dec!(25.00),
            top_product: Some(ProductSales::new("Écran 27 pouces", 5)),
            top_customers: vec![CustomerSpend::new("Alice", "Martin", dec!(25.00))],
            revenue_by_category: vec![
                CategoryRevenue::new("Informatique", dec!(20.00)),
                CategoryRevenue::new("Papeterie", dec!(5.00)),
            ],
            ..Self::default()
        }
    }

    /// Exactly two customers with non-cancelled spend
    pub fn two_customers_scenario() -> Self {
        Self {
            total_revenue: dec!(450.75),
            average_order_value: dec!(150.25),
            top_product: Some(ProductSales::new("Clavier mécanique", 7)),
            top_customers: vec![
                CustomerSpend::new("Chloé", "Bernard", dec!(300.50)),
                CustomerSpend::new("Hugo", "Petit", dec!(150.25)),
            ],
            revenue_by_category: vec![CategoryRevenue::new("Informatique", dec!(450.75))],
            ..Self::default()
        }
    }

    pub fn failing_at(mut self, metric: Metric) -> Self {
        self.fail_at = Some(metric);
        self
    }

    fn record(&mut self, metric: Metric) -> Result<()> {
        self.calls.push(metric);
        if self.fail_at == Some(metric) {
            return Err(AppError::Database(sqlx::Error::Protocol(format!(
                "simulated failure on {:?}",
                metric
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn total_revenue(&mut self) -> Result<Decimal> {
        self.record(Metric::TotalRevenue)?;
        Ok(self.total_revenue)
    }

    async fn average_order_value(&mut self) -> Result<Decimal> {
        self.record(Metric::AverageOrderValue)?;
        Ok(self.average_order_value)
    }

    async fn top_product(&mut self) -> Result<Option<ProductSales>> {
        self.record(Metric::TopProduct)?;
        Ok(self.top_product.clone())
    }

    async fn top_customers(&mut self) -> Result<Vec<CustomerSpend>> {
        self.record(Metric::TopCustomers)?;
        Ok(self.top_customers.clone())
    }

    async fn revenue_by_category(&mut self) -> Result<Vec<CategoryRevenue>> {
        self.record(Metric::RevenueByCategory)?;
        Ok(self.revenue_by_category.clone())
    }
}

/// 2025-11-03 10:30:45 UTC, i.e. 11:30:45 in Paris (CET)
pub fn winter_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 11, 3, 10, 30, 45).unwrap())
}

/// 2025-07-14 20:00:00 UTC, i.e. 22:00:00 in Paris (CEST)
pub fn summer_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 7, 14, 20, 0, 0).unwrap())
}
