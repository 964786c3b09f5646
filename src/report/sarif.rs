use crate::paths::absolutize;
use crate::types::diagnostic::{DiagnosticRecord, Severity};
use crate::types::sarif::{
    ArtifactLocation, DefaultConfiguration, Driver, Location, PhysicalLocation, Region,
    ReportingDescriptor, Run, SarifLog, SarifResult, Text, Tool,
};
use std::collections::HashSet;
use std::path::Path;

pub const SARIF_SCHEMA: &str = "https://json.schemastore.org/sarif-2.1.0.json";
pub const SARIF_VERSION: &str = "2.1.0";
pub const TOOL_NAME: &str = "clang-tidy";
pub const TOOL_INFORMATION_URI: &str = "https://clang.llvm.org/extra/clang-tidy/";
pub const COLUMN_KIND: &str = "utf16CodeUnits";
const RULE_HELP: &str = "See clang-tidy docs.";
const DEFAULT_RULE_LEVEL: &str = "warning";

/// Rule descriptors in first-seen order, one per distinct rule id.
#[derive(Debug, Default)]
pub struct RuleCatalog {
    seen: HashSet<String>,
    rules: Vec<ReportingDescriptor>,
}

impl RuleCatalog {
    /// Registers `rule_id`; returns `false` if it was already present.
    pub fn insert(&mut self, rule_id: &str) -> bool {
        if !self.seen.insert(rule_id.to_string()) {
            return false;
        }
        self.rules.push(describe_rule(rule_id));
        true
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn into_rules(self) -> Vec<ReportingDescriptor> {
        self.rules
    }
}

fn describe_rule(rule_id: &str) -> ReportingDescriptor {
    ReportingDescriptor {
        id: rule_id.to_string(),
        name: rule_id.to_string(),
        short_description: Text::new(rule_id),
        full_description: Text::new(format!(
            "Diagnostic emitted by clang-tidy rule {rule_id}"
        )),
        help: Text::new(RULE_HELP),
        default_configuration: DefaultConfiguration {
            level: DEFAULT_RULE_LEVEL,
        },
    }
}

/// SARIF level for a diagnostic severity.
///
/// Only `error` stays an error; `note` is folded into `warning` along with
/// `warning` itself. Callers wanting notes surfaced as `note` would change it here.
pub fn level_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning | Severity::Note => "warning",
    }
}

fn to_result(record: &DiagnosticRecord, base: &Path) -> SarifResult {
    let uri = absolutize(Path::new(&record.file), base);
    SarifResult {
        rule_id: record.rule.clone(),
        level: level_for(record.severity),
        message: Text::new(record.message.as_str()),
        locations: vec![Location {
            physical_location: PhysicalLocation {
                artifact_location: ArtifactLocation {
                    uri: uri.to_string_lossy().into_owned(),
                },
                region: Region {
                    start_line: record.line + 1,
                    start_column: record.column + 1,
                },
            },
        }],
    }
}

/// Builds the document, resolving relative file paths against `base`.
pub fn build_document(records: &[DiagnosticRecord], base: &Path) -> SarifLog {
    let mut catalog = RuleCatalog::default();
    let mut results = Vec::with_capacity(records.len());
    for record in records {
        if catalog.insert(&record.rule) {
            tracing::debug!(rule = %record.rule, "new rule");
        }
        results.push(to_result(record, base));
    }

    tracing::info!(
        results = results.len(),
        rules = catalog.rule_count(),
        "built sarif run"
    );

    SarifLog {
        schema: SARIF_SCHEMA,
        version: SARIF_VERSION,
        runs: vec![Run {
            tool: Tool {
                driver: Driver {
                    name: TOOL_NAME,
                    information_uri: TOOL_INFORMATION_URI,
                    rules: catalog.into_rules(),
                },
            },
            results,
            column_kind: COLUMN_KIND,
        }],
    }
}

pub fn to_sarif(records: &[DiagnosticRecord], base: &Path) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_document(records, base))
}
