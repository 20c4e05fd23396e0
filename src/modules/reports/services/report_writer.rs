use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::core::{Currency, ReportTimestamp};
use crate::modules::reports::models::{CategoryRevenue, CustomerSpend, ProductSales, SalesReport};

const RULE_WIDTH: usize = 60;

/// Placeholder name when no order item exists
pub const NO_PRODUCT_PLACEHOLDER: &str = "(aucun produit vendu)";

/// Streams the French plain-text sales report, one section at a time.
///
/// Sections must be written in order: `header`, then the five numbered
/// sections. Each section is a heading, a dash rule and its body.
pub struct ReportWriter<W: Write> {
    out: W,
    currency: Currency,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            currency: Currency::EUR,
        }
    }

    pub fn header(&mut self, generated_at: &ReportTimestamp) -> io::Result<()> {
        writeln!(self.out, "RAPPORT SUPERSHOP - ANALYSE DES VENTES")?;
        writeln!(self.out, "Généré le : {}", generated_at.display())?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out)
    }

    pub fn total_revenue(&mut self, total: Decimal) -> io::Result<()> {
        self.heading("1) Chiffre d'affaires total")?;
        writeln!(
            self.out,
            "Le chiffre d'affaires total (hors commandes annulées) est de {}.",
            self.currency.format_amount(total)
        )?;
        self.section_gap()
    }

    pub fn average_order_value(&mut self, average: Decimal) -> io::Result<()> {
        self.heading("2) Panier moyen")?;
        writeln!(
            self.out,
            "Le panier moyen (hors commandes annulées) est de {} par commande.",
            self.currency.format_amount(average)
        )?;
        self.section_gap()
    }

    pub fn top_product(&mut self, product: Option<&ProductSales>) -> io::Result<()> {
        let (name, quantity) = match product {
            Some(p) => (p.name.as_str(), p.total_quantity),
            None => (NO_PRODUCT_PLACEHOLDER, 0),
        };

        self.heading("3) Article le plus vendu")?;
        writeln!(
            self.out,
            "L'article ayant généré le plus de ventes (en quantité totale) est « {} » avec {} unités vendues.",
            name, quantity
        )?;
        self.section_gap()
    }

    pub fn top_customers(&mut self, customers: &[CustomerSpend]) -> io::Result<()> {
        self.heading("4) Top 3 des clients ayant le plus dépensé")?;

        if customers.is_empty() {
            writeln!(self.out, "Aucun client n'a été trouvé.")?;
        } else {
            writeln!(
                self.out,
                "Les trois clients ayant le plus dépensé (hors commandes annulées) sont :"
            )?;
            for (rank, customer) in customers.iter().enumerate() {
                writeln!(
                    self.out,
                    "{}. {} — {}",
                    rank + 1,
                    customer.full_name(),
                    self.currency.format_amount(customer.total_spent)
                )?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out)
    }

    pub fn revenue_by_category(&mut self, categories: &[CategoryRevenue]) -> io::Result<()> {
        self.heading("5) Chiffre d'affaires par catégorie")?;

        if categories.is_empty() {
            writeln!(self.out, "Aucune catégorie n'a généré de chiffre d'affaires.")?;
        } else {
            writeln!(
                self.out,
                "Répartition du chiffre d'affaires (hors commandes annulées) par catégorie de produits :"
            )?;
            for category in categories {
                writeln!(
                    self.out,
                    "- {} : {}",
                    category.category_name,
                    self.currency.format_amount(category.category_revenue)
                )?;
            }
        }

        writeln!(self.out)
    }

    /// Write a complete report in one go
    pub fn write_all(&mut self, report: &SalesReport) -> io::Result<()> {
        self.header(&report.generated_at)?;
        self.total_revenue(report.total_revenue)?;
        self.average_order_value(report.average_order_value)?;
        self.top_product(report.top_product.as_ref())?;
        self.top_customers(&report.top_customers)?;
        self.revenue_by_category(&report.category_revenue)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    fn section_gap(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out)
    }
}

impl ReportWriter<Vec<u8>> {
    /// Render a full report to a string
    pub fn render(report: &SalesReport) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        // Writes into a Vec<u8> cannot fail
        let _ = writer.write_all(report);
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }
}
