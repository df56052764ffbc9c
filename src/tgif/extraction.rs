//! String extraction
//!
//! Walks a parsed program depth-first, left to right, and collects the literal text
//! of tgif text objects, for instance to feed a localization catalog.
//!
//! Calls are matched by callee name against the [vocabulary]:
//!
//! - `str_seg(..., "text")`: the last argument, verbatim
//! - `minilines`, `mini_line`, `str_block`: the strings of every array argument, in order
//! - `text`: the strings of each array argument joined with the grouping separator
//!   (a space by default), all of it as one string
//!
//! Unknown calls contribute nothing. Node kinds that should never carry text
//! (identifiers, operators, functions, ...) are reported as [ExtractionAnomaly]s
//! and logged, and the walk carries on with the rest of the tree.

pub mod vocabulary;

pub use vocabulary::{call_form, CallForm};

use crate::tgif::ast::{ArrayLiteral, CallExpression, Expression, Node, Program, Statement};
use crate::tgif::config::ExtractionConfig;
use serde::Serialize;
use std::fmt;

/// A node the extractor did not expect to find
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionAnomaly {
    pub node_type: &'static str,
    /// Canonical render of the node
    pub text: String,
}

impl fmt::Display for ExtractionAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported: {} [{}]", self.text, self.node_type)
    }
}

/// Result of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub strings: Vec<String>,
    pub anomalies: Vec<ExtractionAnomaly>,
}

/// Collects text from a program
pub struct Extractor {
    grouping_separator: String,
    report_anomalies: bool,
    anomalies: Vec<ExtractionAnomaly>,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            grouping_separator: " ".to_string(),
            report_anomalies: true,
            anomalies: Vec::new(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_grouping_separator(&config.grouping_separator)
            .with_anomaly_reports(config.report_anomalies)
    }

    /// Separator placed between the strings of a `text` object
    pub fn with_grouping_separator(mut self, separator: &str) -> Self {
        self.grouping_separator = separator.to_string();
        self
    }

    /// Whether anomalies are logged; they are recorded either way
    pub fn with_anomaly_reports(mut self, enabled: bool) -> Self {
        self.report_anomalies = enabled;
        self
    }

    pub fn extract(mut self, program: &Program) -> Extraction {
        let strings = program
            .statements
            .iter()
            .flat_map(|statement| self.visit_statement(statement))
            .collect();
        Extraction {
            strings,
            anomalies: self.anomalies,
        }
    }

    fn visit_statement(&mut self, statement: &Statement) -> Vec<String> {
        match statement {
            Statement::Comment(_) => Vec::new(),
            Statement::Expression(stmt) => self.visit_expression(&stmt.expression),
        }
    }

    fn visit_expression(&mut self, expression: &Expression) -> Vec<String> {
        match expression {
            Expression::Call(call) => self.visit_call(call),
            Expression::Array(array) => self.visit_array(array),
            Expression::Integer(_)
            | Expression::Float(_)
            | Expression::String(_)
            | Expression::Boolean(_) => Vec::new(),
            Expression::Identifier(_)
            | Expression::Prefix(_)
            | Expression::Infix(_)
            | Expression::Function(_)
            | Expression::Index(_) => {
                self.anomaly(expression);
                Vec::new()
            }
        }
    }

    fn visit_array(&mut self, array: &ArrayLiteral) -> Vec<String> {
        let mut strings = Vec::new();
        for element in &array.elements {
            strings.extend(self.visit_expression(element));
        }
        strings
    }

    fn visit_call(&mut self, call: &CallExpression) -> Vec<String> {
        let Some(form) = call.callee_name().and_then(call_form) else {
            log::debug!("skipping call to {}", call.function);
            return Vec::new();
        };

        match form {
            CallForm::Paragraph => {
                let mut combined = String::new();
                for array in array_arguments(call) {
                    let strings = self.visit_array(array);
                    combined.push_str(&strings.join(&self.grouping_separator));
                }
                vec![combined]
            }
            CallForm::Lines | CallForm::Line | CallForm::Block => {
                let mut strings = Vec::new();
                for array in array_arguments(call) {
                    strings.extend(self.visit_array(array));
                }
                strings
            }
            CallForm::Segment => match call.arguments.last() {
                Some(text) => vec![text.plain_text()],
                None => {
                    self.record(ExtractionAnomaly {
                        node_type: call.node_type(),
                        text: call.render(),
                    });
                    Vec::new()
                }
            },
        }
    }

    fn anomaly(&mut self, expression: &Expression) {
        self.record(ExtractionAnomaly {
            node_type: expression.node_type(),
            text: expression.render(),
        });
    }

    fn record(&mut self, anomaly: ExtractionAnomaly) {
        if self.report_anomalies {
            log::warn!("{}", anomaly);
        }
        self.anomalies.push(anomaly);
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

fn array_arguments(call: &CallExpression) -> impl Iterator<Item = &ArrayLiteral> {
    call.arguments.iter().filter_map(|argument| match argument {
        Expression::Array(array) => Some(array),
        _ => None,
    })
}

/// Extract the strings of a program with the default settings
pub fn extract_strings(program: &Program) -> Vec<String> {
    Extractor::new().extract(program).strings
}
