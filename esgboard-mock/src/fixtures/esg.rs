use esgboard_core::SustainabilityRecord;

struct Fixture {
    total: f64,
    environment: f64,
    social: f64,
    governance: f64,
    controversy: i64,
    peer_group: &'static str,
    percentile: f64,
    involvements: &'static [&'static str],
}

const INVOLVEMENT_KEYS: [&str; 12] = [
    "adult",
    "alcoholic",
    "animalTesting",
    "controversialWeapons",
    "smallArms",
    "furLeather",
    "gambling",
    "gmo",
    "militaryContract",
    "nuclear",
    "coal",
    "tobacco",
];

fn build(f: &Fixture) -> SustainabilityRecord {
    let mut rec = SustainabilityRecord::new()
        .with("maxAge", 86400_i64)
        .with("totalEsg", f.total)
        .with("environmentScore", f.environment)
        .with("socialScore", f.social)
        .with("governanceScore", f.governance)
        .with("ratingYear", 2024_i64)
        .with("ratingMonth", 9_i64)
        .with("highestControversy", f.controversy)
        .with("esgPerformance", "AVG_PERF")
        .with("peerGroup", f.peer_group)
        .with("percentile", f.percentile);
    for key in INVOLVEMENT_KEYS {
        rec.insert(key, f.involvements.contains(&key));
    }
    rec
}

pub fn by_ticker(s: &str) -> Option<SustainabilityRecord> {
    let f = match s {
        "AAPL" => Fixture {
            total: 16.71,
            environment: 0.65,
            social: 7.48,
            governance: 8.58,
            controversy: 3,
            peer_group: "Technology Hardware",
            percentile: 14.0,
            involvements: &[],
        },
        "MSFT" => Fixture {
            total: 15.2,
            environment: 1.1,
            social: 6.9,
            governance: 7.2,
            controversy: 3,
            peer_group: "Software & Services",
            percentile: 11.5,
            involvements: &["militaryContract"],
        },
        "KO" => Fixture {
            total: 24.0,
            environment: 10.0,
            social: 8.0,
            governance: 6.0,
            controversy: 2,
            peer_group: "Food Products",
            percentile: 35.2,
            involvements: &["alcoholic"],
        },
        "XOM" => Fixture {
            total: 41.6,
            environment: 21.4,
            social: 10.3,
            governance: 9.9,
            controversy: 3,
            peer_group: "Oil & Gas Producers",
            percentile: 78.3,
            involvements: &["coal"],
        },
        "TSLA" => Fixture {
            total: 25.1,
            environment: 2.4,
            social: 14.1,
            governance: 8.6,
            controversy: 4,
            peer_group: "Automobiles",
            percentile: 40.7,
            involvements: &[],
        },
        "PARTIAL" => {
            return Some(
                SustainabilityRecord::new()
                    .with("maxAge", 86400_i64)
                    .with("totalEsg", 31.0)
                    .with("peerGroup", "Diversified Financials"),
            );
        }
        "UNRATED" => {
            return Some(
                SustainabilityRecord::new()
                    .with("maxAge", 86400_i64)
                    .with("totalEsg", 27.3)
                    .with("environmentScore", 4.2)
                    .with("socialScore", 9.8)
                    .with("governanceScore", 6.1)
                    .with("highestControversy", "n/a"),
            );
        }
        _ => return None,
    };
    Some(build(&f))
}

/// Tickers served by the static fixtures.
pub const TICKERS: [&str; 7] = ["AAPL", "MSFT", "KO", "XOM", "TSLA", "PARTIAL", "UNRATED"];
