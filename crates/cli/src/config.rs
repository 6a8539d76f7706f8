use check_json_rules::RuleSet;
use check_json_utils::{Endpoint, FetchOptions};

/// Everything one check run needs, validated before any request is made
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub endpoint: Endpoint,
    pub fetch: FetchOptions,
    pub warning: RuleSet,
    pub critical: RuleSet,
}
