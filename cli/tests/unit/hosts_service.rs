//! Unit tests for the available-hosts listing and the add-hosts batch.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use mockall::Sequence;
use quads_cli::application::services::hosts::{add_hosts, list_available};
use quads_cli::domain::{ApiError, Session};
use serde_json::json;

use crate::mocks::{Line, MockApi, RecordingReporter};

fn hostnames(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_list_available_prints_each_host_and_total() {
    let mut api = MockApi::new();
    api.expect_available_hosts().times(1).returning(|| {
        Ok(vec![
            json!("host01.example.com"),
            json!("host02.example.com"),
            json!({"name": "host03.example.com"}),
        ])
    });
    let reporter = RecordingReporter::default();

    let count = list_available(&api, &reporter).unwrap();

    assert_eq!(count, 3);
    let items: Vec<Line> = reporter
        .lines()
        .into_iter()
        .filter(|l| matches!(l, Line::Item(_)))
        .collect();
    assert_eq!(
        items,
        [
            Line::Item("host01.example.com".to_string()),
            Line::Item("host02.example.com".to_string()),
            Line::Item(r#"{"name":"host03.example.com"}"#.to_string()),
        ]
    );
    assert_eq!(
        reporter.detail_value("Total available hosts").as_deref(),
        Some("3")
    );
}

#[test]
fn test_list_available_empty_reports_zero() {
    let mut api = MockApi::new();
    api.expect_available_hosts().returning(|| Ok(Vec::new()));
    let reporter = RecordingReporter::default();

    assert_eq!(list_available(&api, &reporter).unwrap(), 0);
    assert_eq!(
        reporter.detail_value("Total available hosts").as_deref(),
        Some("0")
    );
}

#[test]
fn test_list_available_rejection_is_an_error() {
    let mut api = MockApi::new();
    api.expect_available_hosts().returning(|| {
        Err(ApiError::Rejected {
            action: "list available hosts",
            status: 500,
            body: "boom".to_string(),
        })
    });
    let reporter = RecordingReporter::default();

    let err = list_available(&api, &reporter).unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn test_add_hosts_adds_in_order() {
    let mut api = MockApi::new();
    let mut seq = Sequence::new();
    for host in ["h1", "h2", "h3"] {
        api.expect_schedule_host()
            .withf(move |session, req| {
                session.bearer() == "Bearer tok" && req.cloud == "cloud02" && req.hostname == host
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
    }
    let reporter = RecordingReporter::default();

    let added = add_hosts(
        &api,
        &Session::new("tok"),
        "cloud02",
        &hostnames(&["h1", "h2", "h3"]),
        &reporter,
    )
    .unwrap();

    assert_eq!(added, 3);
    assert_eq!(reporter.successes().len(), 3);
}

#[test]
fn test_add_hosts_stops_at_first_failure() {
    let mut api = MockApi::new();
    let mut seq = Sequence::new();
    api.expect_schedule_host()
        .withf(|_, req| req.hostname == "h1")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    api.expect_schedule_host()
        .withf(|_, req| req.hostname == "h2")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| {
            Err(ApiError::Rejected {
                action: "add host to cloud",
                status: 400,
                body: "host h2 is not available".to_string(),
            })
        });
    // h3 has no expectation: attempting it would panic the mock.
    let reporter = RecordingReporter::default();

    let err = add_hosts(
        &api,
        &Session::new("tok"),
        "cloud02",
        &hostnames(&["h1", "h2", "h3"]),
        &reporter,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to add host to cloud: host h2 is not available"
    );
    assert_eq!(reporter.successes(), ["Host added to cloud successfully"]);
    assert!(
        !reporter
            .lines()
            .contains(&Line::Step("Adding host: h3 to cloud: cloud02".to_string()))
    );
}
