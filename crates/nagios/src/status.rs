//! Status accumulation and rendering
//!
//! Messages are collected per bucket across the warning and critical passes
//! and the overall code is derived once, by precedence
//! `UNKNOWN > CRITICAL > WARNING > OK`.

use check_json_core::Error;
use std::fmt;

/// Nagios plugin return code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusCode {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl StatusCode {
    /// Process exit code understood by Nagios
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::Warning => 1,
            StatusCode::Critical => 2,
            StatusCode::Unknown => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Warning => "WARNING",
            StatusCode::Critical => "CRITICAL",
            StatusCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Messages of one check run, bucketed by severity.
///
/// Each run builds its own report; nothing is shared between instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    warnings: Vec<String>,
    criticals: Vec<String>,
    unknowns: Vec<String>,
    performance_data: String,
}

impl StatusReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append warning messages; pass `[message]` for a single one
    pub fn append_warning<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.warnings.extend(messages.into_iter().map(Into::into));
    }

    pub fn append_critical<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.criticals.extend(messages.into_iter().map(Into::into));
    }

    pub fn append_unknown<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.unknowns.extend(messages.into_iter().map(Into::into));
    }

    pub fn append_performance_data(&mut self, data: &str) {
        self.performance_data.push_str(data);
    }

    /// Append externally computed performance data together with the
    /// warnings and criticals derived from it
    pub fn append_metrics<W, C>(&mut self, performance_data: &str, warnings: W, criticals: C)
    where
        W: IntoIterator,
        W::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.append_performance_data(performance_data);
        self.append_warning(warnings);
        self.append_critical(criticals);
    }

    /// Record a failure that prevented or interrupted evaluation.
    ///
    /// An unreachable endpoint is critical; everything else (HTTP error
    /// status, unparsable document, bad rule, undecidable value) is unknown.
    pub fn append_error(&mut self, error: &Error) {
        let message = error.to_string();
        match error {
            Error::FetchTransport { .. } => self.criticals.push(message),
            _ => self.unknowns.push(message),
        }
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn criticals(&self) -> &[String] {
        &self.criticals
    }

    #[must_use]
    pub fn unknowns(&self) -> &[String] {
        &self.unknowns
    }

    #[must_use]
    pub fn performance_data(&self) -> &str {
        &self.performance_data
    }

    /// Highest-precedence non-empty bucket, OK when all are empty
    #[must_use]
    pub fn code(&self) -> StatusCode {
        if !self.unknowns.is_empty() {
            StatusCode::Unknown
        } else if !self.criticals.is_empty() {
            StatusCode::Critical
        } else if !self.warnings.is_empty() {
            StatusCode::Warning
        } else {
            StatusCode::Ok
        }
    }

    /// The plugin output line
    #[must_use]
    pub fn render(&self) -> String {
        let label = self.code().label();
        let mut text = format!("{label}: Status {label}. ;");

        for (heading, messages) in [
            ("Warnings", &self.warnings),
            ("Critical", &self.criticals),
            ("Unknown", &self.unknowns),
        ] {
            if !messages.is_empty() {
                text.push_str(&format!(" {heading}: "));
                for message in messages {
                    text.push_str(message);
                    text.push_str("; ");
                }
            }
        }

        if !self.performance_data.is_empty() {
            text.push_str("Performance Data: |");
            text.push_str(&self.performance_data);
        }

        text
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
