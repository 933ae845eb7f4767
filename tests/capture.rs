#![cfg(unix)]

use std::time::Duration;
use a11ylens::artifacts::ArtifactPaths;
use a11ylens::capture::{capture_output, CommandSpec};
use a11ylens::pipeline::{PipelineConfig, ReportPipeline};
use a11ylens::reporting::RenderContext;
use a11ylens::A11yError;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_capture_replays_fixture() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/jest-axe-failure.txt");
    let script = format!("cat '{}' 1>&2; exit 1", fixture);
    let spec = CommandSpec::new("sh", ["-c", script.as_str()]);
    let run = capture_output(&spec, Duration::from_secs(30), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(run.exit_code, 1);
    assert_eq!(run.text, std::fs::read_to_string(fixture).unwrap());
}

#[tokio::test]
async fn test_concurrent_runs_with_separate_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let a = ArtifactPaths::in_dir(&dir.path().join("a"));
    let b = ArtifactPaths::in_dir(&dir.path().join("b"));

    let pipeline_a = ReportPipeline::new(PipelineConfig {
        command: CommandSpec::shell("echo 'color-contrast'; exit 1"),
        timeout: Duration::from_secs(30),
        artifacts: Some(a.clone()),
    });
    let pipeline_b = ReportPipeline::new(PipelineConfig {
        command: CommandSpec::shell("echo 'all good'"),
        timeout: Duration::from_secs(30),
        artifacts: Some(b.clone()),
    });

    let ctx = RenderContext::today();
    let (ra, rb) = tokio::join!(pipeline_a.run(&ctx), pipeline_b.run(&ctx));
    assert!(ra.unwrap().analysis.has_violations());
    assert!(!rb.unwrap().analysis.has_violations());

    assert_eq!(std::fs::read_to_string(&a.snapshot).unwrap(), "color-contrast\n");
    assert_eq!(std::fs::read_to_string(&b.snapshot).unwrap(), "all good\n");
}

#[tokio::test]
async fn test_cancel_from_another_task() {
    let pipeline = ReportPipeline::new(PipelineConfig {
        command: CommandSpec::shell("sleep 20"),
        timeout: Duration::from_secs(60),
        artifacts: None,
    });
    let token = pipeline.cancel_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = pipeline.run(&RenderContext::today()).await.unwrap_err();
    assert!(matches!(err, A11yError::Cancelled(_)));
    assert!(err.classify().fatal);
}
