use std::time::Duration;

use super::{expected_total, pace_interval, spike};
use crate::args::AttackKind;
use crate::config::RunConfig;

fn config() -> RunConfig {
    RunConfig {
        url: "http://localhost:8080".to_owned(),
        method: crate::args::HttpMethod::Get,
        requests: 20,
        rate: 5,
        headers: std::collections::BTreeMap::new(),
        body: String::new(),
        keep_alive: false,
        burst_count: 3,
        step_size: 5,
        spike_height: 5,
        duration: Duration::from_secs(1),
    }
}

#[test]
fn pace_interval_is_the_inverse_rate() {
    assert_eq!(pace_interval(20), Duration::from_millis(50));
    assert_eq!(pace_interval(5), Duration::from_millis(200));
    // Guard, not a reachable configuration: rate is clap-enforced positive.
    assert_eq!(pace_interval(0), Duration::from_secs(1));
}

#[test]
fn lull_schedule_hits_every_spike_height_th_launch() {
    let hits: Vec<usize> = (0..20).filter(|&i| spike::is_lull_index(i, 5)).collect();
    assert_eq!(hits, vec![0, 5, 10, 15]);
    assert!(!spike::is_lull_index(1, 5));
    assert!(!spike::is_lull_index(4, 5));
}

#[test]
fn expected_totals_per_attack() {
    let config = config();
    assert_eq!(expected_total(AttackKind::Steady, &config), Some(20));
    assert_eq!(expected_total(AttackKind::Random, &config), Some(20));
    assert_eq!(expected_total(AttackKind::Rampup, &config), Some(20));
    assert_eq!(expected_total(AttackKind::Spike, &config), Some(20));
    assert_eq!(expected_total(AttackKind::Burst, &config), Some(60));
    assert_eq!(expected_total(AttackKind::Sustained, &config), None);
}
