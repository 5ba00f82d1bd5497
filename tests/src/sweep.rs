use std::fs;
use std::time::Duration;

use netsweep_common::config::ScanConfig;
use netsweep_common::event_log::{EventLogger, HEADER, SESSION_STARTED, SESSION_STOPPED};
use netsweep_core::SubnetScanner;
use netsweep_core::scanner::{LOCAL_UNRESOLVED, OUT_OF_RANGE};
use tempfile::TempDir;

use crate::support::{FakeNetwork, rows};

fn config(bound: u16) -> ScanConfig {
    ScanConfig::new(bound, Duration::from_millis(1000)).unwrap()
}

fn logger(dir: &TempDir) -> EventLogger {
    let mut logger = EventLogger::new();
    logger.set_destination(dir.path().join("log"));
    logger.set_timestamp_format("%d/%m/%Y at %H:%M:%S").unwrap();
    logger
}

/// Mirrors a full CLI session: start, clear, note, local report, sweep, close.
#[tokio::test]
async fn full_session_writes_an_ordered_audit_trail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.html");
    let mut logger = logger(&dir);
    logger.start().unwrap();
    logger.log_message("stale").unwrap();
    logger.clear_log().unwrap();
    logger.log_message("Dev: operator").unwrap();

    let network = FakeNetwork::default()
        .up("192.168.7.1")
        .broken("192.168.7.3");
    let mut scanner = SubnetScanner::new(logger, network, config(5));

    assert!(scanner.report_local().await.unwrap().is_none());
    let outcomes = scanner.scan("192.168.7").await.unwrap();
    scanner.into_logger().close().unwrap();

    let lines: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "192.168.7.1 is reachable",
            "Couldn't reach 192.168.7.2",
            "Couldn't reach 192.168.7.3",
            "Couldn't reach 192.168.7.4",
        ]
    );

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(HEADER));
    assert!(!contents.contains("stale"));

    let rows = rows(&path).unwrap();
    let classes: Vec<&str> = rows.iter().map(|(class, _)| class.as_str()).collect();
    assert_eq!(classes, vec!["status", "info", "error", "error", "status"]);
    assert!(rows[0].1.contains(SESSION_STARTED));
    assert!(rows[1].1.contains("Dev: operator"));
    assert!(rows[2].1.contains(LOCAL_UNRESOLVED));
    assert!(rows[3].1.contains("192.168.7.3"));
    assert!(rows[3].1.contains(OUT_OF_RANGE));
    assert!(rows[4].1.contains(SESSION_STOPPED));
}

#[tokio::test]
async fn every_host_is_probed_despite_failures() {
    let dir = TempDir::new().unwrap();
    let mut network = FakeNetwork::default();
    for suffix in 1..16 {
        network = network.broken(&format!("bad.prefix.{suffix}"));
    }
    let mut scanner = SubnetScanner::new(logger(&dir), network, config(16));
    let outcomes = scanner.scan("bad.prefix").await.unwrap();
    assert_eq!(outcomes.len(), 15);
    assert!(outcomes.iter().all(|o| !o.is_reachable()));

    let path = scanner.logger().destination().to_path_buf();
    let rows = rows(&path).unwrap();
    assert_eq!(rows.len(), 16);
    assert_eq!(rows.iter().filter(|(class, _)| class == "error").count(), 15);
}

#[tokio::test]
async fn silent_hosts_leave_only_the_session_row() {
    let dir = TempDir::new().unwrap();
    let network = FakeNetwork::default().up("127.0.0.1");
    let mut scanner = SubnetScanner::new(logger(&dir), network, config(4));
    scanner.logger_mut().start().unwrap();

    let outcomes = scanner.scan("127.0.0").await.unwrap();
    assert_eq!(outcomes.iter().filter(|o| o.is_reachable()).count(), 1);

    let path = scanner.logger().destination().to_path_buf();
    let rows = rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "status");
}

#[tokio::test]
async fn later_sessions_append_to_the_same_table() {
    let dir = TempDir::new().unwrap();
    for _ in 0..2 {
        let mut scanner = SubnetScanner::new(logger(&dir), FakeNetwork::default(), config(2));
        scanner.logger_mut().start().unwrap();
        scanner.scan("10.9.8").await.unwrap();
        scanner.into_logger().close().unwrap();
    }

    let path = dir.path().join("log.html");
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("<!DOCTYPE html>").count(), 1);
    let classes: Vec<String> = rows(&path).unwrap().into_iter().map(|(c, _)| c).collect();
    assert_eq!(classes, vec!["status"; 4]);
}

#[tokio::test]
async fn probes_follow_suffix_order_without_touching_the_log() {
    let dir = TempDir::new().unwrap();
    let mut scanner = SubnetScanner::new(logger(&dir), FakeNetwork::default(), config(6));
    scanner.scan("172.16.0").await.unwrap();

    assert_eq!(
        scanner.probe().probed(),
        vec!["172.16.0.1", "172.16.0.2", "172.16.0.3", "172.16.0.4", "172.16.0.5"]
    );
    assert!(!scanner.logger().is_ready());
    assert!(!scanner.logger().destination().exists());
}
