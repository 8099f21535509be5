//! One shared line format serves every text sink — console and file render
//! the same `{timestamp} - {name} - {level} - {message}` layout unless the
//! caller supplies a different template.

use crate::sink::Record;
use std::fmt::Write as _;

/// Closed set of known substitution tokens — unknown `{names}` pass through
/// as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Name,
    Level,
    Message,
}

impl Placeholder {
    /// Template parsing needs to match brace-delimited names against known
    /// placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Name => "name",
            Self::Level => "level",
            Self::Message => "message",
        }
    }

    /// Iteration over all variants avoids forgetting a placeholder when
    /// matching by name.
    pub const ALL: &'static [Self] = &[Self::Timestamp, Self::Name, Self::Level, Self::Message];
}

/// Parsing into segments once avoids re-scanning the template on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted with record fields at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed line template — parse once, render for every record.
#[derive(Debug, Clone)]
pub struct LineTemplate {
    segments: Vec<FormatSegment>,
    timestamp_format: String,
}

/// The original multi-sink format: timestamp, logger name, severity, message.
pub const DEFAULT_TEMPLATE: &str = "{timestamp} - {name} - {level} - {message}";

/// Second precision plus milliseconds after a comma, the classic log line
/// timestamp shape.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

impl LineTemplate {
    /// One-time parse turns `"{timestamp} - {message}"` into a segment list
    /// for fast repeated rendering.
    #[must_use]
    pub fn parse(template: &str, timestamp_format: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let chars: Vec<char> = template.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == '{'
                && let Some(end) = chars[i..].iter().position(|&c| c == '}')
            {
                let end = i + end;
                let name: String = chars[i + 1..end].iter().collect();

                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(current.clone()));
                    current.clear();
                }

                if let Some(ph) = Self::match_placeholder(&name) {
                    segments.push(FormatSegment::Placeholder(ph));
                } else {
                    // Unknown placeholder, keep as literal
                    segments.push(FormatSegment::Literal(format!("{{{name}}}")));
                }

                i = end + 1;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self {
            segments,
            timestamp_format: timestamp_format.to_string(),
        }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().find(|ph| ph.as_str() == name).copied()
    }

    /// Tests need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes record fields into the pre-parsed segments — the hot path
    /// for every emitted line.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => match ph {
                    Placeholder::Timestamp => {
                        // An invalid strftime format renders nothing rather
                        // than poisoning every log call
                        let _ = write!(
                            result,
                            "{}",
                            record.timestamp.format(&self.timestamp_format)
                        );
                    }
                    Placeholder::Name => result.push_str(&record.target),
                    Placeholder::Level => result.push_str(record.level.as_str()),
                    Placeholder::Message => result.push_str(&record.message),
                },
            }
        }

        result
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT)
    }
}
