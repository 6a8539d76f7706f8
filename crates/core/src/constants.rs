/// Constants used throughout the check_json codebase
// Flattened property paths
pub const PATH_SEPARATOR: char = '.';

// Rule specification syntax
pub const RULE_FIELD_SEPARATOR: char = ',';
pub const ACCEPTED_VALUE_SEPARATOR: char = ':';

// Existence failures are always reported with their direct siblings
pub const EXISTS_CONTEXT_LEVELS: usize = 1;

// Nagios range syntax
pub const RANGE_INVERT_PREFIX: char = '@';
pub const RANGE_BOUND_SEPARATOR: char = ':';
pub const RANGE_OPEN_LOWER_MARKER: &str = "~";

// Environment variable names
pub const CHECK_JSON_LOG_VAR: &str = "CHECK_JSON_LOG";
