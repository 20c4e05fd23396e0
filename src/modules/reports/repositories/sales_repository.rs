// Read-only aggregate queries over the store schema
// (orders, order_items, products, categories, customers).
//
// Cancelled orders are excluded from every revenue and spend aggregate.
// The best-selling product aggregate counts all orders, cancelled included.
// AVG is rounded to 10 places (half away from zero) so the result fits in a
// Decimal mantissa, then the report rounds half-even to cents. The two steps
// only disagree on a x.xx5 average whose tail lies past the 10th decimal.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{Connection, PgConnection};
use tracing::debug;

use crate::core::Result;
use crate::modules::reports::models::{CategoryRevenue, CustomerSpend, ProductSales};

const TOTAL_REVENUE_SQL: &str = r#"
    SELECT SUM(oi.quantity * oi.unit_price)::NUMERIC AS total_revenue
    FROM order_items oi
    JOIN orders o ON o.order_id = oi.order_id
    WHERE o.status <> 'CANCELLED'
"#;

const AVERAGE_ORDER_VALUE_SQL: &str = r#"
    WITH order_totals AS (
        SELECT
            o.order_id,
            SUM(oi.quantity * oi.unit_price) AS total
        FROM orders o
        JOIN order_items oi ON oi.order_id = o.order_id
        WHERE o.status <> 'CANCELLED'
        GROUP BY o.order_id
    )
    SELECT ROUND(AVG(total)::NUMERIC, 10) AS average_order_value
    FROM order_totals
"#;

const TOP_PRODUCT_SQL: &str = r#"
    SELECT
        p.name,
        SUM(oi.quantity)::BIGINT AS total_quantity
    FROM products p
    JOIN order_items oi ON oi.product_id = p.product_id
    GROUP BY p.product_id, p.name
    ORDER BY total_quantity DESC
    LIMIT 1
"#;

const TOP_CUSTOMERS_SQL: &str = r#"
    SELECT
        c.firstname,
        c.lastname,
        SUM(oi.quantity * oi.unit_price)::NUMERIC AS total_spent
    FROM customers c
    JOIN orders o ON o.customer_id = c.customer_id
    JOIN order_items oi ON oi.order_id = o.order_id
    WHERE o.status <> 'CANCELLED'
    GROUP BY c.customer_id, c.firstname, c.lastname
    ORDER BY total_spent DESC
    LIMIT 3
"#;

const REVENUE_BY_CATEGORY_SQL: &str = r#"
    SELECT
        c.name AS category_name,
        SUM(oi.quantity * oi.unit_price)::NUMERIC AS category_revenue
    FROM order_items oi
    JOIN orders o     ON o.order_id = oi.order_id
    JOIN products p   ON p.product_id = oi.product_id
    JOIN categories c ON c.category_id = p.category_id
    WHERE o.status <> 'CANCELLED'
    GROUP BY c.name
    ORDER BY category_revenue DESC
"#;

/// Sales metrics needed by one report run
#[async_trait]
pub trait SalesRepository: Send {
    /// Sum of quantity × unit price over non-cancelled orders, zero when empty
    async fn total_revenue(&mut self) -> Result<Decimal>;

    /// Mean of per-order totals over non-cancelled orders, zero when empty
    async fn average_order_value(&mut self) -> Result<Decimal>;

    /// Product with the highest summed quantity across all orders
    async fn top_product(&mut self) -> Result<Option<ProductSales>>;

    /// Up to three customers with the highest spend, descending
    async fn top_customers(&mut self) -> Result<Vec<CustomerSpend>>;

    /// Revenue per category, descending; categories without sales are absent
    async fn revenue_by_category(&mut self) -> Result<Vec<CategoryRevenue>>;
}

/// PostgreSQL implementation over a single owned connection
pub struct PgSalesRepository {
    conn: PgConnection,
}

impl PgSalesRepository {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Gracefully terminate the session. Dropping the repository also
    /// releases the socket, which is what happens on error paths.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }

    async fn fetch_decimal(&mut self, sql: &str) -> Result<Decimal> {
        let value: Option<Decimal> = sqlx::query_scalar(sql)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(value.unwrap_or(Decimal::ZERO))
    }
}

#[async_trait]
impl SalesRepository for PgSalesRepository {
    async fn total_revenue(&mut self) -> Result<Decimal> {
        let total = self.fetch_decimal(TOTAL_REVENUE_SQL).await?;
        debug!(%total, "total revenue query done");
        Ok(total)
    }

    async fn average_order_value(&mut self) -> Result<Decimal> {
        let average = self.fetch_decimal(AVERAGE_ORDER_VALUE_SQL).await?;
        debug!(%average, "average order value query done");
        Ok(average)
    }

    async fn top_product(&mut self) -> Result<Option<ProductSales>> {
        let product = sqlx::query_as::<_, ProductSales>(TOP_PRODUCT_SQL)
            .fetch_optional(&mut self.conn)
            .await?;
        debug!(?product, "top product query done");
        Ok(product)
    }

    async fn top_customers(&mut self) -> Result<Vec<CustomerSpend>> {
        let customers = sqlx::query_as::<_, CustomerSpend>(TOP_CUSTOMERS_SQL)
            .fetch_all(&mut self.conn)
            .await?;
        debug!(rows = customers.len(), "top customers query done");
        Ok(customers)
    }

    async fn revenue_by_category(&mut self) -> Result<Vec<CategoryRevenue>> {
        let categories = sqlx::query_as::<_, CategoryRevenue>(REVENUE_BY_CATEGORY_SQL)
            .fetch_all(&mut self.conn)
            .await?;
        debug!(rows = categories.len(), "revenue by category query done");
        Ok(categories)
    }
}
