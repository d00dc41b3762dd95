//! The search → enrich pipeline.
//!
//! Runs strictly in sequence. Any error aborts the whole collection, so the
//! caller never sees a partial record set and nothing is exported.

use log::info;

use crate::config::CoreConfig;
use crate::enrichment::Enricher;
use crate::error::CoreResult;
use crate::progress_reporting;
use crate::provider::VideoProvider;
use crate::record::VideoRecord;

/// Searches for `config.keyword` and enriches every match, in ranking order.
pub fn collect_records<P: VideoProvider>(provider: P, config: &CoreConfig) -> CoreResult<Vec<VideoRecord>> {
    let mut enricher = Enricher::new(provider);
    collect_with(&mut enricher, config)
}

/// Like [`collect_records`], with a caller-supplied enricher.
pub fn collect_with<P: VideoProvider>(enricher: &mut Enricher<P>, config: &CoreConfig) -> CoreResult<Vec<VideoRecord>> {
    progress_reporting::processing(&format!("Searching for '{}'", config.keyword));
    let matches = enricher
        .provider()
        .search_videos(&config.keyword, config.max_results, &config.region_code)?;
    info!(
        "Search for '{}' in {} returned {} match(es)",
        config.keyword,
        config.region_code,
        matches.len()
    );
    progress_reporting::status("Matches", &matches.len().to_string());

    let total = matches.len();
    let mut records = Vec::with_capacity(total);
    for (index, search_match) in matches.iter().enumerate() {
        let record = match enricher.enrich(search_match) {
            Ok(record) => record,
            Err(e) => {
                progress_reporting::clear_progress();
                return Err(e);
            }
        };
        progress_reporting::progress(index + 1, total, &record.title);
        records.push(record);
    }
    progress_reporting::clear_progress();

    Ok(records)
}
