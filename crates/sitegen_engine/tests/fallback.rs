mod common;

use common::{count, init_logging, StubProvider};
use sitegen_engine::{FailureKind, FallbackChain, GenerationOutcome};

#[tokio::test]
async fn primary_success_skips_secondary() {
    init_logging();
    let primary = StubProvider::ok("primary", "<html></html>");
    let secondary = StubProvider::ok("secondary", "unused");
    let secondary_calls = secondary.calls();

    let chain = FallbackChain::new(Box::new(primary), Box::new(secondary));
    let outcome = chain.generate("sys", "prompt").await;

    assert_eq!(
        outcome,
        GenerationOutcome::Generated {
            provider: "primary".to_string(),
            text: "<html></html>".to_string(),
        }
    );
    assert_eq!(count(&secondary_calls), 0);
}

#[tokio::test]
async fn primary_failure_falls_back_once() {
    init_logging();
    let primary = StubProvider::failing("primary", FailureKind::HttpStatus(500));
    let primary_calls = primary.calls();
    let secondary = StubProvider::ok("secondary", "page");
    let secondary_calls = secondary.calls();

    let chain = FallbackChain::new(Box::new(primary), Box::new(secondary));
    let outcome = chain.generate("sys", "prompt").await;

    assert_eq!(
        outcome,
        GenerationOutcome::Generated {
            provider: "secondary".to_string(),
            text: "page".to_string(),
        }
    );
    assert_eq!(count(&primary_calls), 1);
    assert_eq!(count(&secondary_calls), 1);
}

#[tokio::test]
async fn blank_primary_text_counts_as_failure() {
    init_logging();
    let chain = FallbackChain::new(
        Box::new(StubProvider::ok("primary", "  \n ")),
        Box::new(StubProvider::ok("secondary", "page")),
    );
    match chain.generate("sys", "prompt").await {
        GenerationOutcome::Generated { provider, .. } => assert_eq!(provider, "secondary"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn both_failing_reports_every_attempt_in_order() {
    init_logging();
    let primary = StubProvider::failing("primary", FailureKind::Network);
    let secondary = StubProvider::ok("secondary", "");
    let secondary_calls = secondary.calls();

    let chain = FallbackChain::new(Box::new(primary), Box::new(secondary));
    assert_eq!(chain.provider_names(), vec!["primary", "secondary"]);

    let GenerationOutcome::Exhausted { attempts } = chain.generate("sys", "prompt").await else {
        panic!("expected exhaustion");
    };
    let kinds: Vec<_> = attempts
        .iter()
        .map(|a| (a.provider.as_str(), a.kind.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("primary", FailureKind::Network),
            ("secondary", FailureKind::EmptyResponse),
        ]
    );
    assert_eq!(count(&secondary_calls), 1);
}
