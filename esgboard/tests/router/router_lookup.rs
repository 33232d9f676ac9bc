use esgboard::{Dashboard, EsgError, Lookup};

use crate::helpers::{AAPL, MockConnector, rec, t};

#[tokio::test]
async fn first_success_wins_in_registration_order() {
    let first = MockConnector::builder()
        .name("first")
        .returns_ok(rec(10.0, 1.0, 2.0, 3.0))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_ok(rec(99.0, 9.0, 9.0, 9.0))
        .build();
    let dash = Dashboard::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let got = dash.sustainability(&t(AAPL)).await.unwrap();
    assert_eq!(got.total_esg(), Some(10.0));
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 0);
}

#[tokio::test]
async fn not_found_falls_back_to_next_provider() {
    let empty = MockConnector::builder().name("empty").build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_ok(rec(20.0, 1.0, 2.0, 3.0))
        .build();
    let dash = Dashboard::builder()
        .with_connector(empty.clone())
        .with_connector(ok)
        .build()
        .unwrap();

    let row = dash.view(&t(AAPL)).await.unwrap();
    assert_eq!(row.total_esg(), Some(20.0));
    assert_eq!(empty.call_count(), 1);
}

#[tokio::test]
async fn error_falls_back_to_next_provider() {
    let broken = MockConnector::builder()
        .name("broken")
        .fails_with("boom")
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_ok(rec(20.0, 1.0, 2.0, 3.0))
        .build();
    let dash = Dashboard::builder()
        .with_connector(broken)
        .with_connector(ok)
        .build()
        .unwrap();

    assert!(matches!(dash.lookup(&t(AAPL)).await, Lookup::Found(_)));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = MockConnector::builder().name("a").build();
    let b = MockConnector::builder().name("b").build();
    let dash = Dashboard::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = dash.view(&t("ZZZ")).await.unwrap_err();
    match err {
        EsgError::NotFound { what } => assert_eq!(what, "esg for ZZZ"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    match dash.lookup(&t("ZZZ")).await {
        Lookup::NotFound(tk) => assert_eq!(tk.as_str(), "ZZZ"),
        other => panic!("expected NotFound lookup, got {other:?}"),
    }
}

#[tokio::test]
async fn mixed_failures_are_aggregated() {
    let a = MockConnector::builder().name("a").fails_with("down").build();
    let b = MockConnector::builder().name("b").build();
    let dash = Dashboard::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = dash.view(&t(AAPL)).await.unwrap_err();
    match &err {
        EsgError::AllProvidersFailed(errs) => assert_eq!(errs.len(), 2),
        other => panic!("expected AllProvidersFailed, got {other:?}"),
    }
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn single_failure_is_returned_as_is() {
    let a = MockConnector::builder().name("a").fails_with("down").build();
    let dash = Dashboard::builder().with_connector(a).build().unwrap();

    let lookup = dash.lookup(&t(AAPL)).await;
    let notice = lookup.notice().expect("failure notice");
    assert!(!notice.is_warning());
    assert!(notice.message.starts_with("Error retrieving data for AAPL:"));
    assert!(notice.message.contains("down"));
}

#[tokio::test]
async fn non_sustainability_connectors_are_skipped() {
    let bare = MockConnector::builder().name("bare").without_esg().build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_ok(rec(5.0, 1.0, 1.0, 1.0))
        .build();

    let only_bare = Dashboard::builder()
        .with_connector(bare.clone())
        .build()
        .unwrap();
    assert!(matches!(
        only_bare.view(&t(AAPL)).await,
        Err(EsgError::Unsupported { .. })
    ));

    let both = Dashboard::builder()
        .with_connector(bare)
        .with_connector(ok)
        .build()
        .unwrap();
    assert!(both.view(&t(AAPL)).await.is_ok());
}

#[test]
fn build_without_connectors_fails() {
    let err = Dashboard::builder().build().err().expect("build should fail");
    assert!(matches!(err, EsgError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_batch_limit() {
    let ok = MockConnector::builder().build();
    let res = Dashboard::builder().with_connector(ok).batch_limit(0).build();
    assert!(matches!(res, Err(EsgError::InvalidArg(_))));
}
