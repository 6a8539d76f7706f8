//! One check run: validate, fetch, flatten, evaluate, report

use check_json_core::{PropertyMap, Result};
use check_json_nagios::StatusReport;
use check_json_rules::{flatten, RuleProcessor};
use check_json_utils::HttpFetcher;
use tracing::{debug, info, warn};

use crate::args::Args;
use crate::config::CheckConfig;

/// Run the whole check and return the report to print.
///
/// Every failure ends up in the report; nothing here returns early with an
/// error of its own.
pub async fn run(args: &Args) -> StatusReport {
    let mut report = StatusReport::new();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "invalid rule configuration");
            report.append_error(&e);
            return report;
        }
    };

    match fetch(&config).await {
        Ok(body) => check_document(&body, &config, &mut report),
        Err(e) => {
            warn!(error = %e, "fetch failed");
            report.append_error(&e);
        }
    }

    report
}

async fn fetch(config: &CheckConfig) -> Result<String> {
    let fetcher = HttpFetcher::new(&config.endpoint, config.fetch.clone())?;
    fetcher.fetch().await
}

/// Evaluate a fetched body against the warning and critical rules
pub fn check_document(body: &str, config: &CheckConfig, report: &mut StatusReport) {
    let properties = match parse_document(body) {
        Ok(properties) => properties,
        Err(e) => {
            report.append_error(&e);
            return;
        }
    };

    let processor = RuleProcessor::new(&properties);

    let warnings = processor.evaluate(&config.warning);
    report.append_warning(warnings.failures);
    report.append_unknown(warnings.errors);

    let criticals = processor.evaluate(&config.critical);
    report.append_critical(criticals.failures);
    report.append_unknown(criticals.errors);

    info!(status = %report.code(), "check complete");
}

fn parse_document(body: &str) -> Result<PropertyMap> {
    let document: serde_json::Value = serde_json::from_str(body)?;
    let properties = flatten(&document)?;

    debug!("Parsed Properties:");
    for (key, value) in &properties {
        debug!("{key}={value}");
    }
    if !properties.collisions().is_empty() {
        warn!(
            paths = ?properties.collisions(),
            "distinct document locations flattened to the same path, later values kept"
        );
    }

    Ok(properties)
}
