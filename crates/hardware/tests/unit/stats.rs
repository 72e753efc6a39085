//! Statistics Tests.
//!
//! Derived metrics and the JSON rendering used by `--stats-json`.

use mipsim_core::stats::SimStats;

#[test]
fn ipc_is_zero_before_any_cycle() {
    assert_eq!(SimStats::default().ipc(), 0.0);
}

#[test]
fn ipc_is_retired_over_cycles() {
    let stats = SimStats {
        cycles: 200,
        retired: 150,
        ..SimStats::default()
    };
    assert!((stats.ipc() - 0.75).abs() < 1e-12);
}

#[test]
fn json_contains_every_counter() {
    let stats = SimStats {
        cycles: 9,
        fetched: 8,
        retired: 3,
        squashed: 1,
        mispredictions: 1,
        ..SimStats::default()
    };
    let v: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();
    assert_eq!(v["cycles"], 9);
    assert_eq!(v["fetched"], 8);
    assert_eq!(v["retired"], 3);
    assert_eq!(v["squashed"], 1);
    assert_eq!(v["mispredictions"], 1);
    for key in [
        "branches",
        "stalls_fetch",
        "stalls_mem",
        "stalls_data",
        "stalls_muldiv",
        "icache_hits",
        "icache_misses",
        "dcache_hits",
        "dcache_misses",
    ] {
        assert_eq!(v[key], 0, "{key}");
    }
}

#[test]
fn print_survives_zero_denominators() {
    SimStats::default().print();
}
