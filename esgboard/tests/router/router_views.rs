use std::sync::Arc;

use esgboard::{Dashboard, EsgError, SustainabilityRecord};
use esgboard_core::{ControversyLevel, RiskLevel, Scalar};
use esgboard_mock::{DynamicMockConnector, MockBehavior, MockConnector as FixtureConnector};

use crate::helpers::{AAPL, KO, MSFT, t};

fn fixtures() -> Dashboard {
    Dashboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn view_puts_ticker_first_and_max_age_last() {
    let row = fixtures().view(&t("ko")).await.unwrap();
    let cols: Vec<&str> = row.column_names().collect();
    assert_eq!(cols.first(), Some(&"company_ticker"));
    assert_eq!(cols.last(), Some(&"maxAge"));
    assert_eq!(row.ticker().as_str(), KO);
    assert_eq!(cols[1], "totalEsg");
}

#[tokio::test]
async fn view_missing_ticker_is_not_found() {
    let err = fixtures().view(&t("NOPE")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn score_card_classifies_headline_metrics() {
    let (_, card) = fixtures().score_card(&t(KO)).await.unwrap();
    assert_eq!(card.total_esg, Some(24.0));
    assert_eq!(card.risk, Some(RiskLevel::Medium));
    assert_eq!(card.controversy, Some(ControversyLevel::Moderate));

    let (_, card) = fixtures().score_card(&t("XOM")).await.unwrap();
    assert_eq!(card.risk, Some(RiskLevel::High));
}

#[tokio::test]
async fn score_card_keeps_row_when_controversy_is_unclassifiable() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    for (ticker, level) in [("ODD", Scalar::from("n/a")), ("NEG", Scalar::from(-1.0))] {
        let record = SustainabilityRecord::new()
            .with("totalEsg", 25.0)
            .with("environmentScore", 1.0)
            .with("highestControversy", level);
        ctl.set_behavior(t(ticker), MockBehavior::Return(record)).await;
    }
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    for ticker in ["ODD", "NEG"] {
        let (row, card) = dash.score_card(&t(ticker)).await.unwrap();
        assert!(row.highest_controversy().is_some());
        assert_eq!(card.risk, Some(RiskLevel::Medium));
        assert_eq!(card.environment, Some(1.0));
        assert_eq!(card.controversy, None);
        assert_eq!(card.notices.len(), 1, "{ticker}");
        assert!(card.notices[0].message.contains("highestControversy"));
        assert!(card.notices[0].message.contains(ticker));
    }
}

#[tokio::test]
async fn compare_builds_fixed_category_rows() {
    let cmp = fixtures().compare(&t(AAPL), &t(MSFT)).await.unwrap();
    assert_eq!(cmp.table.row_labels(), ["Environment", "Social", "Governance"]);
    assert_eq!(cmp.table.labels(), &[AAPL.to_string(), MSFT.to_string()]);
    assert_eq!(cmp.table.rows()[0].values, [0.65, 1.1]);
    let [a, b] = cmp.tickers();
    assert_eq!((a.as_str(), b.as_str()), (AAPL, MSFT));
}

#[tokio::test]
async fn compare_with_partial_record_is_a_data_error() {
    let err = fixtures()
        .compare(&t(AAPL), &t("PARTIAL"))
        .await
        .unwrap_err();
    match err {
        EsgError::Data(msg) => assert!(msg.contains("PARTIAL")),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn compare_reports_missing_ticker() {
    let err = fixtures().compare(&t("NOPE"), &t(AAPL)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn row_serializes_in_display_order() {
    let row = fixtures().view(&t(KO)).await.unwrap();
    let json = serde_json::to_string(&row).unwrap();
    assert!(json.starts_with(r#"{"company_ticker":"KO","totalEsg":24.0,"#), "{json}");
    assert!(json.ends_with(r#""maxAge":86400.0}"#), "{json}");
}
