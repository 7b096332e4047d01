//! Report formatter implementations.

use serde::Serialize;

use crate::assembler::AssembledCommand;
use crate::{Error, Result};

use super::{ReportFormatter, TableSummary};

/// Formatter for plain text output.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_commands(&self, commands: &[&AssembledCommand]) -> Result<String> {
        Ok(commands
            .iter()
            .map(|cmd| cmd.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_tables(&self, tables: &[TableSummary]) -> Result<String> {
        let lines: Vec<String> = tables
            .iter()
            .map(|table| {
                let mut modes = Vec::new();
                if table.build {
                    modes.push("build");
                }
                if table.flash {
                    modes.push("flash");
                }
                let modes = if modes.is_empty() {
                    "-".to_string()
                } else {
                    modes.join(",")
                };
                if table.is_blocked() {
                    format!(
                        "{}\t{modes}\tblocked: {} ({})",
                        table.name,
                        table.status.as_deref().unwrap_or_default(),
                        table.status_document.as_deref().unwrap_or_default()
                    )
                } else {
                    format!("{}\t{modes}", table.name)
                }
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Render {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_commands(&self, commands: &[&AssembledCommand]) -> Result<String> {
        Self::render(commands)
    }

    fn format_tables(&self, tables: &[TableSummary]) -> Result<String> {
        Self::render(tables)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl YamlFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| Error::Render {
                format: "yaml".to_string(),
                message: e.to_string(),
            })
    }
}

impl ReportFormatter for YamlFormatter {
    fn format_commands(&self, commands: &[&AssembledCommand]) -> Result<String> {
        Self::render(commands)
    }

    fn format_tables(&self, tables: &[TableSummary]) -> Result<String> {
        Self::render(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::RunMode;

    fn command(name: &str, text: &str) -> AssembledCommand {
        AssembledCommand {
            command: name.to_string(),
            mode: RunMode::Build,
            source: "../src/".to_string(),
            text: text.to_string(),
            warnings: Vec::new(),
        }
    }

    fn summary(name: &str, status: Option<(&str, &str)>) -> TableSummary {
        TableSummary {
            name: name.to_string(),
            build: true,
            flash: false,
            status: status.map(|(s, _)| s.to_string()),
            status_document: status.map(|(_, d)| d.to_string()),
        }
    }

    #[test]
    fn test_text_keeps_command_spacing() {
        let a = command("tfa", " make -j2 -C ../src/ all ");
        let b = command("linux", " zImage ");
        let output = TextFormatter.format_commands(&[&a, &b]).unwrap();
        assert_eq!(output, " make -j2 -C ../src/ all \n zImage ");
    }

    #[test]
    fn test_text_tables() {
        let tables = [summary("tfa", None), summary("optee", Some(("off", "mp2")))];
        let output = TextFormatter.format_tables(&tables).unwrap();
        assert_eq!(output, "tfa\tbuild\noptee\tbuild\tblocked: off (mp2)");
    }

    #[test]
    fn test_json_commands() {
        let a = command("tfa", " all ");
        let output = JsonFormatter.format_commands(&[&a]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["command"], "tfa");
        assert_eq!(parsed[0]["mode"], "build");
        assert_eq!(parsed[0]["text"], " all ");
    }

    #[test]
    fn test_json_tables() {
        let output = JsonFormatter
            .format_tables(&[summary("optee", Some(("off", "mp2")))])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "optee");
        assert_eq!(parsed[0]["status"], "off");
        assert_eq!(parsed[0]["status_document"], "mp2");
    }

    #[test]
    fn test_yaml_commands() {
        let a = command("linux", " zImage ");
        let output = YamlFormatter.format_commands(&[&a]).unwrap();
        assert!(output.contains("command: linux"));
        assert!(output.contains("mode: build"));
        assert!(!output.ends_with('\n'));
    }
}
