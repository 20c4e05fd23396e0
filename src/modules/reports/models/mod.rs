mod sales_report;

pub use sales_report::{CategoryRevenue, CustomerSpend, ProductSales, SalesReport};
