use ferrous_sidecar_api::dto::ProbeHealthResponse;
use ferrous_sidecar_domain::{DomainError, PENDING_PROBE_ERROR};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{app, get, unit, StaticMetrics};

fn metrics() -> Arc<StaticMetrics> {
    Arc::new(StaticMetrics::new(""))
}

#[tokio::test]
async fn test_healthy_probe_returns_200() {
    let (router, probes) = app(
        vec![unit(
            "kubedns,127.0.0.1:53,kubernetes.default.svc.cluster.local,5,A",
            Ok(Duration::from_millis(4)),
        )],
        metrics(),
    );
    probes.get("kubedns").unwrap().run_once().await.unwrap();

    let (status, content_type, body) = get(router, "/healthcheck/kubedns").await;

    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: ProbeHealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(json.label, "kubedns");
    assert_eq!(json.server, "127.0.0.1:53");
    assert_eq!(json.name, "kubernetes.default.svc.cluster.local.");
    assert_eq!(json.record_type, "A");
    assert!(json.is_ok);
    assert_eq!(json.latency_ms, Some(4.0));
    assert!(json.error.is_none());
    assert!(json.last_check_time.unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_failing_probe_returns_503() {
    let (router, probes) = app(
        vec![unit(
            "dnsmasq,127.0.0.1:53,example.com,5,A",
            Err(DomainError::ProbeRcode {
                server: "127.0.0.1:53".to_string(),
                rcode: "SERVFAIL".to_string(),
            }),
        )],
        metrics(),
    );
    probes.get("dnsmasq").unwrap().run_once().await.unwrap();

    let (status, _, body) = get(router, "/healthcheck/dnsmasq").await;

    assert_eq!(status, 503);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["is_ok"], false);
    assert_eq!(json["type"], "A");
    assert!(json["error"].as_str().unwrap().contains("SERVFAIL"));
    assert!(json["latency_ms"].is_null());
}

#[tokio::test]
async fn test_pending_probe_returns_503() {
    let (router, _) = app(
        vec![unit("fresh,127.0.0.1:53,example.com", Ok(Duration::ZERO))],
        metrics(),
    );

    let (status, _, body) = get(router, "/healthcheck/fresh").await;

    assert_eq!(status, 503);
    let json: ProbeHealthResponse = serde_json::from_str(&body).unwrap();
    assert!(!json.is_ok);
    assert!(json.last_check_time.is_none());
    assert_eq!(json.error.as_deref(), Some(PENDING_PROBE_ERROR));
    assert_eq!(json.record_type, "ANY");
}

#[tokio::test]
async fn test_unknown_label_returns_404() {
    let (router, _) = app(
        vec![unit("known,127.0.0.1:53,example.com", Ok(Duration::ZERO))],
        metrics(),
    );

    let (status, _, body) = get(router, "/healthcheck/unknown").await;

    assert_eq!(status, 404);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn test_each_label_reports_its_own_state() {
    let (router, probes) = app(
        vec![
            unit("up,127.0.0.1:53,example.com", Ok(Duration::from_millis(1))),
            unit(
                "down,127.0.0.2:53,example.com",
                Err(DomainError::ProbeTimeout {
                    server: "127.0.0.2:53".to_string(),
                    timeout_ms: 4000,
                }),
            ),
        ],
        metrics(),
    );
    for unit in probes.units() {
        unit.run_once().await.unwrap();
    }

    let (up, _, _) = get(router.clone(), "/healthcheck/up").await;
    let (down, _, _) = get(router, "/healthcheck/down").await;

    assert_eq!(up, 200);
    assert_eq!(down, 503);
}

#[tokio::test]
async fn test_healthcheck_root_is_not_routed() {
    let (router, _) = app(vec![], metrics());

    let (status, _, _) = get(router, "/healthcheck/").await;
    assert_eq!(status, 404);
}
