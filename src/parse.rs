use crate::types::diagnostic::{DiagnosticRecord, Severity};
use regex::Regex;
use std::sync::LazyLock;

// path/to/file.cpp:12:34: warning: message [check-name]
static DIAGNOSTIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<file>.*?):(?P<line>[0-9]+):(?P<col>[0-9]+):\s+(?P<severity>warning|error|note):\s+(?P<message>.*?)\s*\[(?P<rule>[^\]]+)\]\s*$",
    )
    .expect("diagnostic pattern should compile")
});

/// Line boundaries: LF, CR, VT, FF, FS, GS, RS, NEL, LS and PS. A CRLF pair
/// leaves an empty piece between the two, which never matches.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Parses every diagnostic line in `text`, keeping input order.
///
/// Lines that do not match the diagnostic shape are skipped; this never fails.
pub fn parse_diagnostics(text: &str) -> Vec<DiagnosticRecord> {
    let mut skipped = 0usize;
    let records = text
        .split(is_line_break)
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            record
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        parsed = records.len(),
        skipped,
        "diagnostic lines scanned"
    );
    records
}

/// Matches a single physical line. Positions are converted to 0-based.
pub fn parse_line(line: &str) -> Option<DiagnosticRecord> {
    let caps = DIAGNOSTIC_LINE.captures(line)?;
    let record = DiagnosticRecord {
        file: caps["file"].to_string(),
        line: to_zero_based(&caps["line"])?,
        column: to_zero_based(&caps["col"])?,
        severity: Severity::from_token(&caps["severity"])?,
        message: caps["message"].trim_end().to_string(),
        rule: caps["rule"].to_string(),
    };
    tracing::trace!(
        file = %record.file,
        line = record.line,
        column = record.column,
        severity = %record.severity,
        rule = %record.rule,
        "parsed diagnostic"
    );
    Some(record)
}

// Only values beyond i64 fail here.
fn to_zero_based(digits: &str) -> Option<i64> {
    Some(digits.parse::<i64>().ok()? - 1)
}
