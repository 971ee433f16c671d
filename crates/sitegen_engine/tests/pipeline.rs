mod common;

use common::{count, init_logging, StubProvider, VALID_PAGE};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use sitegen_core::{sanitize, GeneratedArtifact, Marker};
use sitegen_engine::{FailureKind, FallbackChain, Pipeline, PipelineError, Provider, ERROR_PREFIX};

fn pipeline(primary: StubProvider, secondary: StubProvider, seed: u64) -> Pipeline {
    Pipeline::with_rng(
        FallbackChain::new(Box::new(primary), Box::new(secondary)),
        StdRng::seed_from_u64(seed),
    )
}

#[tokio::test]
async fn successful_run_tags_sanitized_document() {
    init_logging();
    let mut pipeline = pipeline(
        StubProvider::ok("primary", VALID_PAGE),
        StubProvider::failing("secondary", FailureKind::Network),
        1,
    );

    let artifact = pipeline.run("hello").await.expect("artifact");
    assert_eq!(artifact.document, sanitize(VALID_PAGE));
    assert_eq!(
        artifact.document.as_str(),
        "<!DOCTYPE html><html><head><title>Hi</title></head><body>hello</body></html>"
    );

    let rendered = artifact.render();
    let (header, rest) = rendered.split_once("\n\n").unwrap();
    let shape = Regex::new(r"^APP_NAME='[a-z]{8}'$").unwrap();
    assert!(shape.is_match(header), "bad header {header:?}");
    assert_eq!(rest, artifact.document.as_str());
    assert_eq!(GeneratedArtifact::parse(&rendered).unwrap(), artifact);
}

#[tokio::test]
async fn fallback_result_equals_secondary_alone() {
    init_logging();
    let mut with_fallback = pipeline(
        StubProvider::failing("primary", FailureKind::HttpStatus(401)),
        StubProvider::ok("secondary", VALID_PAGE),
        99,
    );
    let providers: Vec<Box<dyn Provider>> =
        vec![Box::new(StubProvider::ok("secondary", VALID_PAGE))];
    let mut secondary_only =
        Pipeline::with_rng(FallbackChain::from_providers(providers), StdRng::seed_from_u64(99));

    assert_eq!(
        with_fallback.run("x").await.unwrap(),
        secondary_only.run("x").await.unwrap()
    );
}

#[tokio::test]
async fn both_providers_failing_is_provider_unavailable() {
    init_logging();
    let mut pipeline = pipeline(
        StubProvider::failing("primary", FailureKind::Timeout),
        StubProvider::failing("secondary", FailureKind::MissingCredentials),
        3,
    );

    match pipeline.run("x").await {
        Err(PipelineError::ProviderUnavailable { attempts }) => assert_eq!(attempts.len(), 2),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        pipeline.run_prompt("x").await,
        "Error: Failed to generate website code"
    );
}

#[tokio::test]
async fn document_without_head_or_body_fails_validation() {
    init_logging();
    let mut pipeline = pipeline(
        StubProvider::ok("primary", "Here you go:\n<!DOCTYPE html><html></html>\nBye"),
        StubProvider::ok("secondary", VALID_PAGE),
        4,
    );

    assert_eq!(
        pipeline.run("x").await,
        Err(PipelineError::ValidationFailed {
            missing: vec![Marker::HeadOpen, Marker::BodyOpen],
        })
    );
    let message = pipeline.run_prompt("x").await;
    assert!(message.starts_with(ERROR_PREFIX));
    assert_eq!(message, "Error: Generated code validation failed");
    assert!(!message.contains("<html"));
}

#[tokio::test]
async fn plain_text_answer_is_wrapped_and_accepted() {
    init_logging();
    let mut pipeline = pipeline(
        StubProvider::ok("primary", "just some text"),
        StubProvider::ok("secondary", VALID_PAGE),
        5,
    );
    let artifact = pipeline.run("x").await.unwrap();
    assert!(artifact.document.as_str().contains("just some text"));
}

#[tokio::test]
async fn app_names_are_well_formed_across_runs() {
    init_logging();
    let primary = StubProvider::ok("primary", VALID_PAGE);
    let calls = primary.calls();
    let mut pipeline = pipeline(
        primary,
        StubProvider::failing("secondary", FailureKind::Network),
        6,
    );

    for _ in 0..20 {
        let artifact = pipeline.run("x").await.unwrap();
        let name = artifact.app_name.as_str();
        assert_eq!(name.len(), 8);
        assert!(name.bytes().all(|b| b.is_ascii_lowercase()));
    }
    assert_eq!(count(&calls), 20);
}
