//! Plain text formats: the canonical render and the extracted strings

use super::registry::{FormatError, Formatter};
use crate::tgif::ast::Node;
use crate::tgif::config::ExtractionConfig;
use crate::tgif::extraction::Extractor;
use crate::tgif::parsing::Document;

/// The canonical render of the program
pub struct RenderFormatter;

impl Formatter for RenderFormatter {
    fn name(&self) -> &str {
        "render"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut rendered = doc.program.render();
        if !rendered.is_empty() && !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    fn description(&self) -> &str {
        "Canonical, fully parenthesized source"
    }
}

/// Extracted strings, one per line
pub struct StringsFormatter {
    grouping_separator: String,
    report_anomalies: bool,
}

impl StringsFormatter {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            grouping_separator: config.grouping_separator.clone(),
            report_anomalies: config.report_anomalies,
        }
    }
}

impl Default for StringsFormatter {
    fn default() -> Self {
        Self {
            grouping_separator: " ".to_string(),
            report_anomalies: true,
        }
    }
}

impl Formatter for StringsFormatter {
    fn name(&self) -> &str {
        "strings"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let extraction = Extractor::new()
            .with_grouping_separator(&self.grouping_separator)
            .with_anomaly_reports(self.report_anomalies)
            .extract(&doc.program);

        let mut output = String::new();
        for string in extraction.strings {
            output.push_str(&string);
            output.push('\n');
        }
        Ok(output)
    }

    fn description(&self) -> &str {
        "Literal text of tgif text objects, one string per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tgif::parsing::parse_document;

    #[test]
    fn test_render() {
        let doc = parse_document("1 + 2 * 3. f(x)");
        let output = RenderFormatter.serialize(&doc).unwrap();
        insta::assert_snapshot!(output.trim_end(), @r###"
        (1 + (2 * 3)).
        f(x)
        "###);
    }

    #[test]
    fn test_render_empty() {
        let doc = parse_document("");
        assert_eq!(RenderFormatter.serialize(&doc).unwrap(), "");
    }

    #[test]
    fn test_strings() {
        let doc = parse_document(
            r#"text([minilines([mini_line([str_block([str_seg("Hello,"), str_seg("world")])]), mini_line([str_block([str_seg("again")])])])])."#,
        );
        let output = StringsFormatter::default().serialize(&doc).unwrap();
        assert_eq!(output, "Hello, world again\n");
    }

    #[test]
    fn test_strings_with_config() {
        let config = ExtractionConfig {
            grouping_separator: "_".to_string(),
            report_anomalies: false,
        };
        let doc = parse_document(r#"text([str_seg("a"), str_seg("b")])"#);
        let output = StringsFormatter::from_config(&config).serialize(&doc).unwrap();
        assert_eq!(output, "a_b\n");
    }
}
