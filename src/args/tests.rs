use std::str::FromStr;
use std::time::Duration;

use clap::Parser;

use super::parsers::parse_duration_arg;
use super::{AttackArgs, AttackKind, HttpMethod};

fn parse(args: &[&str]) -> Result<AttackArgs, clap::Error> {
    let mut full = vec!["volley"];
    full.extend_from_slice(args);
    AttackArgs::try_parse_from(full)
}

#[test]
fn defaults_match_documented_values() -> Result<(), String> {
    let args = parse(&[]).map_err(|err| err.to_string())?;
    assert_eq!(args.url, "http://localhost:8080");
    assert_eq!(args.attack, AttackKind::Steady);
    assert_eq!(args.method, HttpMethod::Get);
    assert_eq!(args.requests, 100);
    assert_eq!(args.rate, 20);
    assert_eq!(args.burst_count, 5);
    assert_eq!(args.step_size, 10);
    assert_eq!(args.spike_height, 10);
    assert_eq!(args.duration, Duration::from_secs(10));
    assert!(args.body_file.is_none());
    assert!(!args.keep_alive);
    assert!(!args.no_plot);
    assert_eq!(args.results_path, "./results");
    assert!(args.workers.is_none());
    Ok(())
}

#[test]
fn unknown_attack_name_is_rejected() {
    assert!(parse(&["--attack", "tsunami"]).is_err());
}

#[test]
fn attack_names_parse_case_insensitively() -> Result<(), String> {
    let args = parse(&["--attack", "RAMPUP"]).map_err(|err| err.to_string())?;
    assert_eq!(args.attack, AttackKind::Rampup);
    Ok(())
}

#[test]
fn zero_rate_is_rejected() {
    assert!(parse(&["--rate", "0"]).is_err());
}

#[test]
fn zero_requests_are_rejected() {
    assert!(parse(&["--requests", "0"]).is_err());
}

#[test]
fn duration_parses_unit_suffixes() -> Result<(), String> {
    assert_eq!(
        parse_duration_arg("250ms").map_err(|err| err.to_string())?,
        Duration::from_millis(250)
    );
    assert_eq!(
        parse_duration_arg("30").map_err(|err| err.to_string())?,
        Duration::from_secs(30)
    );
    assert_eq!(
        parse_duration_arg("2m").map_err(|err| err.to_string())?,
        Duration::from_secs(120)
    );
    assert!(parse_duration_arg("0s").is_err());
    assert!(parse_duration_arg("abc").is_err());
    Ok(())
}

#[test]
fn attack_kind_from_str_covers_the_fixed_enumeration() -> Result<(), String> {
    for (name, kind) in [
        ("steady", AttackKind::Steady),
        ("random", AttackKind::Random),
        ("burst", AttackKind::Burst),
        ("rampup", AttackKind::Rampup),
        ("spike", AttackKind::Spike),
        ("sustained", AttackKind::Sustained),
    ] {
        assert_eq!(AttackKind::from_str(name).map_err(|err| err.to_string())?, kind);
        assert_eq!(kind.as_str(), name);
    }
    assert!(AttackKind::from_str("flood").is_err());
    Ok(())
}
