use std::path::Path;

use yamllint_rs::{FileProcessor, ProcessingOptions, Severity};

/// Lint a YAML file, failing the test on any error-level issue.
pub(crate) fn assert_yaml_lints_clean(file: &Path) {
    let mut config = yamllint_rs::config::Config::new();
    config.set_rule_enabled("line-length", false);
    config.set_rule_enabled("indentation", false);
    config.set_rule_enabled("truthy", false);
    config.set_rule_enabled("document-start", false);
    config.set_rule_enabled("comments", false);

    let processor = FileProcessor::with_config(ProcessingOptions::default(), config);

    match processor.process_file(file) {
        Ok(result) => {
            let issues: Vec<_> = result
                .issues
                .iter()
                .filter(|(issue, _)| issue.severity == Severity::Error)
                .collect();

            let mut msg = String::new();
            for (issue, line) in &issues {
                msg.push_str(&format!("\n    L{}: {} - {}", issue.line, issue.message, line));
            }
            assert!(issues.is_empty(), "YAML lint errors in {}:{}", file.display(), msg);
        }
        Err(e) => panic!("failed to lint {}: {}", file.display(), e),
    }
}
