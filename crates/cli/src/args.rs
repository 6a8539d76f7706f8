use check_json_core::{Result, Severity};
use check_json_rules::RuleSet;
use check_json_utils::{Endpoint, FetchOptions};
use clap::Parser;
use std::time::Duration;

use crate::config::CheckConfig;

const AFTER_HELP: &str = "\
Rule formats:
  equality   key_regex,value[:value...],level
  threshold  key_regex,[@]start:end,level   (N means 0:N, ~ is an open lower bound)
  existence  key_regex

Key regexes match from the start of flattened keys such as
`critical.module.status` or `nodes.[0].load`. `level` is the number of
trailing path segments to drop when listing sibling values in a message.";

/// Command-line arguments of `check_json`
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "check_json")]
#[command(about = "Checks values of a JSON health document fetched over HTTP", long_about = None)]
#[command(version, after_help = AFTER_HELP)]
pub struct Args {
    /// Host to fetch the document from
    #[arg(short = 'H', long)]
    pub host: String,

    /// TCP port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Path of the document on the host
    #[arg(short = 'p', long)]
    pub path: Option<String>,

    /// Use HTTPS
    #[arg(short = 's', long)]
    pub ssl: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Basic auth credentials
    #[arg(short = 'B', long = "basic-auth", value_name = "USER:PASSWORD")]
    pub basic_auth: Option<String>,

    /// Warn unless the value equals one of the given values
    #[arg(short = 'q', long = "key_equals", num_args = 0.., value_name = "RULE")]
    pub key_equals: Vec<String>,

    /// Critical unless the value equals one of the given values
    #[arg(short = 'Q', long = "key_equals_critical", num_args = 0.., value_name = "RULE")]
    pub key_equals_critical: Vec<String>,

    /// Warn when no key matches
    #[arg(short = 'e', long = "key_exists", num_args = 0.., value_name = "KEY_REGEX")]
    pub key_exists: Vec<String>,

    /// Critical when no key matches
    #[arg(short = 'E', long = "key_exists_critical", num_args = 0.., value_name = "KEY_REGEX")]
    pub key_exists_critical: Vec<String>,

    /// Warn when the value falls outside the threshold
    #[arg(short = 'w', long = "warning", num_args = 0.., value_name = "RULE")]
    pub key_threshold_warning: Vec<String>,

    /// Critical when the value falls outside the threshold
    #[arg(short = 'c', long = "critical", num_args = 0.., value_name = "RULE")]
    pub key_threshold_critical: Vec<String>,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log parsed properties and every rule decision to stderr
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Args {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            host: self.host.clone(),
            port: self.port,
            path: self.path.clone(),
            tls: self.ssl,
        }
    }

    #[must_use]
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.timeout.map(Duration::from_secs),
            basic_auth: self.basic_auth.clone(),
        }
    }

    pub fn warning_rules(&self) -> Result<RuleSet> {
        RuleSet::parse(
            Severity::Warning,
            &self.key_equals,
            &self.key_threshold_warning,
            &self.key_exists,
        )
    }

    pub fn critical_rules(&self) -> Result<RuleSet> {
        RuleSet::parse(
            Severity::Critical,
            &self.key_equals_critical,
            &self.key_threshold_critical,
            &self.key_exists_critical,
        )
    }

    /// Validate every rule and assemble the run configuration
    pub fn to_config(&self) -> Result<CheckConfig> {
        Ok(CheckConfig {
            endpoint: self.endpoint(),
            fetch: self.fetch_options(),
            warning: self.warning_rules()?,
            critical: self.critical_rules()?,
        })
    }
}
