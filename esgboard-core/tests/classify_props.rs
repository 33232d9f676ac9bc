use esgboard_core::{ControversyLevel, RiskLevel, classify_controversy, classify_esg};
use proptest::prelude::*;

proptest! {
    #[test]
    fn esg_buckets_follow_thresholds(score in -100.0f64..200.0) {
        let level = classify_esg(score).unwrap();
        let expected = if score < 20.0 {
            RiskLevel::Low
        } else if score < 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn esg_buckets_are_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_esg(lo).unwrap() <= classify_esg(hi).unwrap());
    }

    #[test]
    fn controversy_clamps_above_four(level in 4.0f64..1.0e6) {
        prop_assert_eq!(classify_controversy(level).unwrap(), ControversyLevel::Severe);
    }

    #[test]
    fn controversy_truncates(level in 0.0f64..4.0) {
        let got = classify_controversy(level).unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = level.trunc() as usize;
        prop_assert_eq!(got, ControversyLevel::ALL[idx]);
    }

    #[test]
    fn controversy_rejects_negative(level in -1.0e6f64..-1.0e-9) {
        prop_assert!(classify_controversy(level).is_err());
    }
}

#[test]
fn labels_match_dashboard_text() {
    assert_eq!(classify_esg(19.0).unwrap().to_string(), "Low Risk");
    assert_eq!(classify_esg(20.0).unwrap().to_string(), "Medium Risk");
    assert_eq!(classify_esg(39.9).unwrap().to_string(), "Medium Risk");
    assert_eq!(classify_esg(40.0).unwrap().to_string(), "High Risk");
    assert_eq!(classify_controversy(0.0).unwrap().to_string(), "None");
    assert_eq!(classify_controversy(4.0).unwrap().to_string(), "Severe");
    assert_eq!(classify_controversy(7.0).unwrap().to_string(), "Severe");
}
