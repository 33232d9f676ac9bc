use std::fmt::Write as _;
use std::sync::Arc;

use esgboard::{Dashboard, EsgError};
use esgboard_mock::{DynamicMockConnector, MockConnector as FixtureConnector};

#[tokio::test]
async fn upload_reads_ticker_column() {
    let dash = Dashboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let csv = "name,ticker_code\nCoca-Cola,KO\nNobody,\nMicrosoft,msft\nUnknown,ZZZZ\n";
    let report = dash.upload(csv.as_bytes()).await.unwrap();

    let got: Vec<&str> = report.rows.iter().map(|r| r.ticker().as_str()).collect();
    assert_eq!(got, ["KO", "MSFT"]);
    assert_eq!(report.warnings().count(), 1);
    let table = report.table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.columns().last().map(String::as_str), Some("maxAge"));
}

#[tokio::test]
async fn upload_truncates_to_first_hundred_rows() {
    let (c, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let dash = Dashboard::builder().with_connector(c).build().unwrap();

    let mut csv = String::from("ticker_code\n");
    for i in 0..150 {
        writeln!(csv, "T{i}").unwrap();
    }
    let report = dash.upload(csv.as_bytes()).await.unwrap();
    assert_eq!(report.dropped, 50);
    assert_eq!(ctl.calls().await.len(), 100);
}

#[tokio::test]
async fn upload_without_ticker_column_fails() {
    let dash = Dashboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let err = dash.upload("symbol\nKO\n".as_bytes()).await.unwrap_err();
    assert!(matches!(err, EsgError::InvalidArg(_)));
}

#[tokio::test]
async fn upload_honours_custom_column() {
    let dash = Dashboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .ticker_column("symbol")
        .build()
        .unwrap();

    let report = dash.upload("symbol\nAAPL\n".as_bytes()).await.unwrap();
    assert_eq!(report.rows.len(), 1);
}
