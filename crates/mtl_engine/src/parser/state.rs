//! Per-parse state shared by the statement handlers

use log::warn;

use super::accumulator::MaterialAccumulator;
use super::statement::Statement;
use super::ParsedLibrary;
use crate::error::{ErrorContext, MtlError, Notice};
use crate::material::Material;

/// State of one `parse` call
#[derive(Debug)]
pub(crate) struct ParseState<'a> {
    source_name: Option<&'a str>,
    line_number: usize,
    accumulator: MaterialAccumulator,
    notices: Vec<Notice>,
}

impl<'a> ParseState<'a> {
    pub(crate) fn new(source_name: Option<&'a str>, default_material_name: &str) -> Self {
        Self {
            source_name,
            line_number: 0,
            accumulator: MaterialAccumulator::new(default_material_name),
            notices: Vec::new(),
        }
    }

    pub(crate) fn set_line(&mut self, line_number: usize) {
        self.line_number = line_number;
    }

    pub(crate) fn accumulator(&mut self) -> &mut MaterialAccumulator {
        &mut self.accumulator
    }

    pub(crate) fn current_or_default(&mut self) -> &mut Material {
        self.accumulator.current_or_default()
    }

    pub(crate) fn context(&self) -> ErrorContext {
        ErrorContext {
            source: self.source_name.map(str::to_string),
            material: self.accumulator.current().map(|m| m.name.clone()),
            line: self.line_number,
        }
    }

    /// Record a statement that is accepted but not evaluated
    pub(crate) fn not_implemented(&mut self, statement: Statement, message: impl Into<String>) {
        let notice = Notice {
            statement: statement.keyword(),
            message: message.into(),
            context: self.context(),
        };
        warn!("{}", notice);
        self.notices.push(notice);
    }

    pub(crate) fn unrecognized(&self, keyword: &str) -> MtlError {
        MtlError::UnrecognizedStatement {
            keyword: keyword.to_string(),
            context: self.context(),
        }
    }

    pub(crate) fn missing_arguments(
        &self,
        statement: Statement,
        expected: usize,
        found: usize,
        usage: &'static str,
    ) -> MtlError {
        MtlError::MissingArguments {
            statement: statement.keyword(),
            expected,
            found,
            usage,
            context: self.context(),
        }
    }

    pub(crate) fn invalid_number(&self, statement: Statement, token: &str) -> MtlError {
        MtlError::InvalidNumber {
            statement: statement.keyword(),
            token: token.to_string(),
            context: self.context(),
        }
    }

    pub(crate) fn finish(self) -> ParsedLibrary {
        ParsedLibrary {
            materials: self.accumulator.into_materials(),
            notices: self.notices,
        }
    }
}
