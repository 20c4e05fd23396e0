use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ReportTimestamp;

/// Best-selling product by total quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProductSales {
    pub name: String,
    pub total_quantity: i64,
}

/// Spend of one customer over non-cancelled orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CustomerSpend {
    pub firstname: String,
    pub lastname: String,
    pub total_spent: Decimal,
}

/// Revenue of one product category over non-cancelled orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CategoryRevenue {
    pub category_name: String,
    pub category_revenue: Decimal,
}

/// Everything one report run computed, in section order
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    pub generated_at: ReportTimestamp,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    pub top_product: Option<ProductSales>,
    pub top_customers: Vec<CustomerSpend>,
    pub category_revenue: Vec<CategoryRevenue>,
}

impl ProductSales {
    pub fn new(name: impl Into<String>, total_quantity: i64) -> Self {
        Self {
            name: name.into(),
            total_quantity,
        }
    }
}

impl CustomerSpend {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>, total_spent: Decimal) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            total_spent,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl CategoryRevenue {
    pub fn new(category_name: impl Into<String>, category_revenue: Decimal) -> Self {
        Self {
            category_name: category_name.into(),
            category_revenue,
        }
    }
}

impl SalesReport {
    /// Sum of the per-category lines; matches `total_revenue` whenever every
    /// sold product belongs to a category
    pub fn total_category_revenue(&self) -> Decimal {
        self.category_revenue
            .iter()
            .map(|c| c.category_revenue)
            .sum()
    }

    /// Compact JSON summary of the run, logged once the file is written
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// True when no non-cancelled sale exists at all
    pub fn is_empty(&self) -> bool {
        self.total_revenue.is_zero() && self.top_customers.is_empty() && self.category_revenue.is_empty()
    }
}
