// tubescout-core/tests/pipeline_tests.rs

mod common;

use common::{MockProvider, channel, video};
use tubescout_core::config::CoreConfigBuilder;
use tubescout_core::{CoreError, ExportOutcome, collect_records, export_records};

#[test]
fn test_collect_records_preserves_search_order() {
    let provider = MockProvider::new()
        .with_video("v1", "c1", video("v1", "First", "300", "3", "0", "2024-01-01T00:00:00Z"))
        .with_video("v2", "c2", video("v2", "Second", "200", "2", "0", "2024-01-01T00:00:00Z"))
        .with_video("v3", "c1", video("v3", "Third", "100", "1", "0", "2024-01-01T00:00:00Z"))
        .with_channel("c1", channel("c1", "Alpha", Some("10")))
        .with_channel("c2", channel("c2", "Beta", None))
        .with_category("27", "Education");
    let config = CoreConfigBuilder::new().api_key("k").keyword("bridges").build();

    let records = collect_records(&provider, &config).unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
    assert_eq!(records[1].subscribers.to_string(), "Hidden");
    assert_eq!(provider.count_calls("channel:"), 2);
}

#[test]
fn test_search_receives_configured_parameters() {
    let provider = MockProvider::new();
    let config = CoreConfigBuilder::new()
        .api_key("k")
        .keyword("lofi")
        .max_results(7)
        .region_code("GB")
        .build();

    let records = collect_records(&provider, &config).unwrap();

    assert!(records.is_empty());
    assert_eq!(provider.calls(), vec!["search:lofi:7:GB".to_string()]);
}

#[test]
fn test_search_failure_propagates_untouched() {
    let mut provider = MockProvider::new();
    provider.fail_search = true;
    let config = CoreConfigBuilder::new().api_key("k").build();

    match collect_records(&provider, &config) {
        Err(CoreError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "quotaExceeded");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[test]
fn test_enrichment_failure_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xlsx");
    // v2's channel is unknown to the provider.
    let provider = MockProvider::new()
        .with_video("v1", "c1", video("v1", "Fine", "10", "1", "0", "2024-01-01T00:00:00Z"))
        .with_video("v2", "c9", video("v2", "Orphan", "10", "1", "0", "2024-01-01T00:00:00Z"))
        .with_channel("c1", channel("c1", "Alpha", Some("10")));
    let config = CoreConfigBuilder::new().api_key("k").output_path(&output).build();

    let result = collect_records(&provider, &config)
        .and_then(|records| export_records(&records, &config.output_path, config.resolved_format()));

    assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
    assert!(!output.exists());
}

#[test]
fn test_empty_search_exports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("none.xlsx");
    let provider = MockProvider::new();
    let config = CoreConfigBuilder::new().api_key("k").output_path(&output).build();

    let records = collect_records(&provider, &config).unwrap();
    let outcome = export_records(&records, &config.output_path, config.resolved_format()).unwrap();

    assert_eq!(outcome, ExportOutcome::NoData);
    assert!(!output.exists());
}
