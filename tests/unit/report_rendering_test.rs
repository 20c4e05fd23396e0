//! Rendering tests for the sales report
//!
//! Drives ReportService::write_report with an in-memory repository and checks
//! the exact text written.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{winter_clock, InMemorySalesRepository, Metric};
use rust_decimal_macros::dec;
use supershop_report::core::{AppError, Clock};
use supershop_report::reports::services::ReportWriter;
use supershop_report::reports::ReportService;

async fn render(repo: InMemorySalesRepository) -> (String, InMemorySalesRepository) {
    let mut service = ReportService::new(repo);
    let mut out = Vec::new();
    service
        .write_report(&mut out, winter_clock().report_timestamp())
        .await
        .expect("report should render");
    (String::from_utf8(out).unwrap(), service.into_repository())
}

#[tokio::test]
async fn test_single_order_scenario_full_text() {
    let (text, _) = render(InMemorySalesRepository::single_order_scenario()).await;

    let rule = "-".repeat(60);
    let expected = format!(
        "RAPPORT SUPERSHOP - ANALYSE DES VENTES\n\
         Généré le : 2025-11-03 11:30:45\n\
         {eq}\n\
         \n\
         1) Chiffre d'affaires total\n\
         {rule}\n\
         Le chiffre d'affaires total (hors commandes annulées) est de 25.00 €.\n\
         \n\
         \n\
         2) Panier moyen\n\
         {rule}\n\
         Le panier moyen (hors commandes annulées) est de 25.00 € par commande.\n\
         \n\
         \n\
         3) Article le plus vendu\n\
         {rule}\n\
         L'article ayant généré le plus de ventes (en quantité totale) est « Écran 27 pouces » avec 5 unités vendues.\n\
         \n\
         \n\
         4) Top 3 des clients ayant le plus dépensé\n\
         {rule}\n\
         Les trois clients ayant le plus dépensé (hors commandes annulées) sont :\n\
         1. Alice Martin — 25.00 €\n\
         \n\
         \n\
         5) Chiffre d'affaires par catégorie\n\
         {rule}\n\
         Répartition du chiffre d'affaires (hors commandes annulées) par catégorie de produits :\n\
         - Informatique : 20.00 €\n\
         - Papeterie : 5.00 €\n\
         \n",
        eq = "=".repeat(60),
        rule = rule,
    );

    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_empty_store_renders_zeros_and_placeholders() {
    let (text, _) = render(InMemorySalesRepository::empty()).await;

    assert!(text.contains("est de 0.00 €.\n"));
    assert!(text.contains("est de 0.00 € par commande.\n"));
    assert!(text.contains("« (aucun produit vendu) » avec 0 unités vendues."));
    assert!(text.contains("Aucun client n'a été trouvé.\n"));
    assert!(text.contains("Aucune catégorie n'a généré de chiffre d'affaires.\n"));
}

#[tokio::test]
async fn test_two_customers_are_not_padded() {
    let (text, _) = render(InMemorySalesRepository::two_customers_scenario()).await;

    assert!(text.contains("1. Chloé Bernard — 300.50 €\n"));
    assert!(text.contains("2. Hugo Petit — 150.25 €\n"));
    assert!(!text.contains("\n3. "));
    assert!(!text.contains("Aucun client"));
}

#[tokio::test]
async fn test_queries_run_once_in_section_order() {
    let (_, repo) = render(InMemorySalesRepository::single_order_scenario()).await;

    assert_eq!(
        repo.calls,
        vec![
            Metric::TotalRevenue,
            Metric::AverageOrderValue,
            Metric::TopProduct,
            Metric::TopCustomers,
            Metric::RevenueByCategory,
        ]
    );
}

#[tokio::test]
async fn test_failing_query_aborts_remaining_sections() {
    let repo = InMemorySalesRepository::single_order_scenario().failing_at(Metric::TopProduct);
    let mut service = ReportService::new(repo);
    let mut out = Vec::new();

    let result = service
        .write_report(&mut out, winter_clock().report_timestamp())
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("2) Panier moyen"));
    assert!(!text.contains("3) Article le plus vendu"));

    let repo = service.into_repository();
    assert_eq!(repo.calls.last(), Some(&Metric::TopProduct));
    assert_eq!(repo.calls.len(), 3);
}

#[tokio::test]
async fn test_streamed_output_matches_render() {
    let repo = InMemorySalesRepository::two_customers_scenario();
    let mut service = ReportService::new(repo);
    let mut out = Vec::new();

    let report = service
        .write_report(&mut out, winter_clock().report_timestamp())
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), ReportWriter::render(&report));
    assert_eq!(report.total_category_revenue(), dec!(450.75));
}
