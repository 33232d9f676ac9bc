use std::time::Duration;

use esgboard::{Dashboard, EsgError, Lookup};
use esgboard_core::{SustainabilityRecord, Ticker};
use esgboard_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{MockConnector, rec, t};

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out() {
    let (slow, ctl) = DynamicMockConnector::new_with_controller("slow");
    ctl.set_behavior(t("SLOW"), MockBehavior::Hang).await;

    let dash = Dashboard::builder()
        .with_connector(slow)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = dash.view(&t("SLOW")).await.unwrap_err();
    match err {
        EsgError::ProviderTimeout { connector, capability } => {
            assert_eq!(connector, "slow");
            assert_eq!(capability, "sustainability");
        }
        other => panic!("expected ProviderTimeout, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn timeout_falls_back_to_next_provider() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(60))
        .returns_ok(rec(1.0, 1.0, 1.0, 1.0))
        .build();
    let (fast, ctl) = DynamicMockConnector::new_with_controller("fast");
    let fixture = SustainabilityRecord::new().with("totalEsg", 7.0);
    ctl.set_behavior(t("KO"), MockBehavior::Return(fixture)).await;

    let dash = Dashboard::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    match dash.lookup(&Ticker::new("ko").unwrap()).await {
        Lookup::Found(row) => assert_eq!(row.total_esg(), Some(7.0)),
        other => panic!("expected Found, got {other:?}"),
    }
}
