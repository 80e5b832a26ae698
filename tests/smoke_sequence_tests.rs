use deploy_smoke::config::SmokeConfig;
use deploy_smoke::probe::{BearerToken, OutcomeKind, Prober};
use deploy_smoke::smoke::{
    run_exit_status, DeploymentSmokeTester, AUTH_PROBE_TITLE, SKIPPED_AFTER_FAILURE,
    SKIPPED_WITHOUT_TOKEN,
};
use mockito::Matcher;

fn tester() -> DeploymentSmokeTester {
    DeploymentSmokeTester::new(SmokeConfig::default(), Prober::new().unwrap())
}

async fn json_mock(
    server: &mut mockito::ServerGuard,
    path: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn healthy_deployment_passes_every_step() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 200, r#"{"status": "healthy"}"#).await;
    let _root = json_mock(&mut server, "/", 200, r#"{"message": "Query service running"}"#).await;
    let _docs = json_mock(&mut server, "/docs", 200, "<html>docs</html>").await;
    let _schema = json_mock(
        &mut server,
        "/openapi.json",
        200,
        r#"{"info": {"title": "Query API", "version": "1.2.0"}}"#,
    )
    .await;

    let base_url = server.url();
    let report = tester().run(&base_url).await;

    assert!(report.passed());
    assert_eq!(report.steps.len(), 4);
    assert!(report.steps.iter().all(|s| s.outcome.is_pass()));

    let root = report.step("Testing root endpoint").unwrap();
    assert_eq!(root.outcome.field("Message"), Some("Query service running"));
    let docs = report.step("Testing API documentation").unwrap();
    assert_eq!(
        docs.outcome.field("Documentation URL"),
        Some(format!("{}/docs", base_url).as_str())
    );
    let schema = report.step("Testing OpenAPI schema").unwrap();
    assert_eq!(schema.outcome.field("API Title"), Some("Query API"));
    assert_eq!(schema.outcome.field("API Version"), Some("1.2.0"));

    assert!(report.to_string().contains(&format!("Alternative Docs: {}/redoc", base_url)));
}

#[tokio::test]
async fn failing_health_skips_remaining_steps() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 503, r#"{"status": "down"}"#).await;
    let root = server.mock("GET", "/").expect(0).create_async().await;
    let docs = server.mock("GET", "/docs").expect(0).create_async().await;
    let schema = server.mock("GET", "/openapi.json").expect(0).create_async().await;

    let report = tester().run(&server.url()).await;

    assert!(!report.passed());
    assert_eq!(report.steps.len(), 1);
    assert_eq!(report.steps[0].outcome.message, "Health check failed: HTTP 503");
    root.assert_async().await;
    docs.assert_async().await;
    schema.assert_async().await;
}

#[tokio::test]
async fn missing_schema_is_recorded_but_run_passes() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 200, r#"{"status": "healthy"}"#).await;
    let _root = json_mock(&mut server, "/", 200, r#"{"message": "hi"}"#).await;
    let _docs = json_mock(&mut server, "/docs", 200, "<html></html>").await;
    let _schema = json_mock(&mut server, "/openapi.json", 404, r#"{"detail": "Not Found"}"#).await;

    let report = tester().run(&server.url()).await;

    assert!(report.passed());
    assert_eq!(report.steps.len(), 4);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].outcome.message, "OpenAPI schema failed: HTTP 404");
}

#[tokio::test]
async fn broken_middle_steps_do_not_stop_the_sequence() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 200, r#"{"status": "healthy"}"#).await;
    // 200 with a body that is not JSON.
    let _root = json_mock(&mut server, "/", 200, "plain text").await;
    let _docs = json_mock(&mut server, "/docs", 500, "").await;
    let schema = server
        .mock("GET", "/openapi.json")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let report = tester().run(&server.url()).await;

    assert!(report.passed());
    schema.assert_async().await;
    let kinds: Vec<_> = report.steps.iter().map(|s| s.outcome.kind).collect();
    assert_eq!(
        kinds,
        vec![OutcomeKind::Pass, OutcomeKind::Fail, OutcomeKind::Fail, OutcomeKind::Pass]
    );
    assert!(report.steps[1].outcome.message.starts_with("Root endpoint error:"));
    assert_eq!(
        report.steps[3].outcome.field("API Title"),
        Some("N/A")
    );
}

#[tokio::test]
async fn unreachable_deployment_fails() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let report = tester().run(&format!("http://127.0.0.1:{}", port)).await;

    assert!(!report.passed());
    assert!(report.steps[0].outcome.message.starts_with("Health check error:"));
}

#[tokio::test]
async fn authenticated_probe_sends_token_and_payload() {
    let mut server = mockito::Server::new_async().await;
    let run = server
        .mock("POST", "/hackrx/run")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "documents": "https://www.example.com/sample.pdf",
            "questions": ["What is this document about?"],
        })))
        .with_status(200)
        .with_body(r#"{"answers": []}"#)
        .create_async()
        .await;

    let token = BearerToken::new("test-token").unwrap();
    let outcome = tester().run_authenticated_probe(&server.url(), &token).await;

    run.assert_async().await;
    assert!(outcome.is_pass());
}

#[tokio::test]
async fn authenticated_probe_accepts_auth_and_validation_errors() {
    let token = BearerToken::new("test-token").unwrap();

    for status in [401, 422] {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hackrx/run")
            .with_status(status)
            .create_async()
            .await;

        let outcome = tester().run_authenticated_probe(&server.url(), &token).await;
        assert_eq!(outcome.kind, OutcomeKind::Warn, "status {}", status);
    }

    for status in [500, 503] {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hackrx/run")
            .with_status(status)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let outcome = tester().run_authenticated_probe(&server.url(), &token).await;
        assert_eq!(outcome.kind, OutcomeKind::Fail, "status {}", status);
        assert_eq!(outcome.field("Response"), Some("upstream exploded..."));
    }
}

#[tokio::test]
async fn auth_probe_failure_does_not_change_overall_result() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 200, r#"{"status": "healthy"}"#).await;
    let _root = json_mock(&mut server, "/", 200, "{}").await;
    let _docs = json_mock(&mut server, "/docs", 200, "").await;
    let _schema = json_mock(&mut server, "/openapi.json", 200, "{}").await;
    let _run = server
        .mock("POST", "/hackrx/run")
        .with_status(500)
        .create_async()
        .await;

    let token = BearerToken::new("test-token").unwrap();
    let report = tester().run_with_auth(&server.url(), Some(&token)).await;

    assert!(report.passed());
    let auth = report.step(AUTH_PROBE_TITLE).unwrap();
    assert!(auth.outcome.is_failure());
}

#[tokio::test]
async fn auth_probe_is_skipped_after_failed_run() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 500, "").await;
    let run = server
        .mock("POST", "/hackrx/run")
        .expect(0)
        .create_async()
        .await;

    let token = BearerToken::new("test-token").unwrap();
    let report = tester().run_with_auth(&server.url(), Some(&token)).await;

    assert!(!report.passed());
    let auth = report.step(AUTH_PROBE_TITLE).unwrap();
    assert_eq!(auth.outcome.kind, OutcomeKind::Warn);
    assert_eq!(auth.outcome.message, SKIPPED_AFTER_FAILURE);
    run.assert_async().await;
}

async fn healthy_server() -> (mockito::ServerGuard, Vec<mockito::Mock>) {
    let mut server = mockito::Server::new_async().await;
    let mocks = vec![
        json_mock(&mut server, "/health", 200, r#"{"status": "healthy"}"#).await,
        json_mock(&mut server, "/", 200, r#"{"message": "up"}"#).await,
        json_mock(&mut server, "/docs", 200, "").await,
        json_mock(&mut server, "/openapi.json", 200, "{}").await,
    ];
    (server, mocks)
}

#[tokio::test]
async fn missing_token_is_reported_as_skipped_step() {
    let (server, _mocks) = healthy_server().await;

    let report = tester().run_with_auth(&server.url(), None).await;

    assert!(report.passed());
    assert_eq!(report.steps.len(), 5);
    let auth = report.step(AUTH_PROBE_TITLE).unwrap();
    assert_eq!(auth.outcome.kind, OutcomeKind::Warn);
    assert_eq!(auth.outcome.message, SKIPPED_WITHOUT_TOKEN);
    assert!(report
        .to_string()
        .contains("5. Testing main API endpoint (requires valid API keys)...\n⚠️ Skipped: no bearer token configured"));
}

#[tokio::test]
async fn exit_status_is_zero_for_healthy_deployment() {
    let (server, _mocks) = healthy_server().await;

    let result: anyhow::Result<_> = Ok(tester().run_with_auth(&server.url(), None).await);

    assert_eq!(run_exit_status(&result), 0);
}

#[tokio::test]
async fn exit_status_is_one_when_health_gate_fails() {
    let mut server = mockito::Server::new_async().await;
    let _health = json_mock(&mut server, "/health", 503, "").await;

    let result: anyhow::Result<_> = Ok(tester().run_with_auth(&server.url(), None).await);

    assert_eq!(run_exit_status(&result), 1);
}

#[test]
fn exit_status_is_two_when_target_cannot_be_resolved() {
    let result = deploy_smoke::smoke::resolve_base_url("my app", "herokuapp.com")
        .map_err(anyhow::Error::from)
        .map(|base_url| deploy_smoke::smoke::SmokeReport::new(base_url));

    assert_eq!(run_exit_status(&result), 2);
}
