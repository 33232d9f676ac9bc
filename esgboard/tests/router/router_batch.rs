use esgboard::{Dashboard, NO_DATA_FOUND, NoticeLevel};
use esgboard_core::{Ticker, TickerBatch};
use esgboard_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{MockConnector, rec, t};

fn tickers(list: &[&str]) -> Vec<Ticker> {
    list.iter().map(|s| t(s)).collect()
}

#[tokio::test]
async fn empty_batch_reports_single_warning() {
    let c = MockConnector::builder().build();
    let dash = Dashboard::builder().with_connector(c.clone()).build().unwrap();

    let report = dash.aggregate(Vec::new()).await;
    assert!(report.rows.is_empty());
    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].level, NoticeLevel::Warning);
    assert_eq!(report.notices[0].message, NO_DATA_FOUND);
    assert_eq!(c.call_count(), 0);
}

#[tokio::test]
async fn missing_ticker_warns_and_others_are_kept() {
    let c = MockConnector::builder()
        .with_fn(|tk| {
            if tk.as_str() == "BBB" {
                Ok(rec(12.0, 1.0, 2.0, 3.0))
            } else {
                Err(esgboard::EsgError::not_found(format!("esg for {tk}")))
            }
        })
        .build();
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    let report = dash.aggregate(tickers(&["AAA", "BBB"])).await;
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].ticker().as_str(), "BBB");
    assert_eq!(report.notices.len(), 1);
    assert!(report.notices[0].is_warning());
    assert!(report.notices[0].message.contains("AAA"));
    assert_eq!(report.requested, 2);
    assert_eq!(report.dropped, 0);
}

#[tokio::test]
async fn failure_is_reported_and_batch_continues() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_behavior(
        t("BAD"),
        MockBehavior::Fail(esgboard::EsgError::connector("dyn", "connection reset")),
    )
    .await;
    ctl.set_behavior(t("GOOD"), MockBehavior::Return(rec(30.0, 3.0, 3.0, 3.0)))
        .await;
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    let report = dash.aggregate(tickers(&["BAD", "GOOD"])).await;
    assert_eq!(report.rows.len(), 1);
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("BAD"));
    assert!(errors[0].message.contains("connection reset"));
    assert_eq!(ctl.calls().await, tickers(&["BAD", "GOOD"]));
}

#[tokio::test]
async fn no_rows_collapses_warnings_but_keeps_errors() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_behavior(
        t("BAD"),
        MockBehavior::Fail(esgboard::EsgError::connector("dyn", "boom")),
    )
    .await;
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    let report = dash.aggregate(tickers(&["X1", "BAD", "X2"])).await;
    assert!(report.rows.is_empty());
    assert_eq!(report.warnings().count(), 1);
    assert_eq!(report.warnings().next().unwrap().message, NO_DATA_FOUND);
    assert_eq!(report.errors().count(), 1);
}

#[tokio::test]
async fn input_is_capped_before_any_call() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    let input: Vec<Ticker> = (0..150).map(|i| t(&format!("T{i}"))).collect();
    let report = dash.aggregate(input.clone()).await;

    assert_eq!(report.requested, 100);
    assert_eq!(report.dropped, 50);
    let calls = ctl.calls().await;
    assert_eq!(calls.len(), 100);
    assert_eq!(calls, input[..100].to_vec());
}

#[tokio::test]
async fn custom_batch_limit_applies() {
    let c = MockConnector::builder()
        .returns_ok(rec(1.0, 1.0, 1.0, 1.0))
        .build();
    let dash = Dashboard::builder()
        .with_connector(c.clone())
        .batch_limit(2)
        .build()
        .unwrap();

    let report = dash.aggregate(tickers(&["A", "B", "C"])).await;
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.dropped, 1);
    assert_eq!(c.call_count(), 2);
    assert_eq!(report.table().columns().first().map(String::as_str), Some("company_ticker"));

    let report = dash
        .aggregate_batch(TickerBatch::from_parts(tickers(&["Z"]), 7))
        .await;
    assert_eq!(report.dropped, 7);
}
