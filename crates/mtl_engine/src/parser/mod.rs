//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl text into an ordered list of [`Material`] records.
//!
//! Each line is tokenized, its keyword is looked up in the closed
//! [`Statement`] set and the matching handler updates the current material.
//! Property statements that appear before any `newmtl` go to an implicitly
//! created material named after the configured default.
//!
//! Two failure classes exist:
//! - [`MtlError`]: unknown keyword, or a supported statement with missing or
//!   non-numeric arguments. The whole parse fails.
//! - [`Notice`]: a recognized statement the parser does not evaluate
//!   (`Kd`, `Ns`, `map_Kd`, spectral colors, ...). Logged and collected.

mod accumulator;
mod handlers;
mod line;
mod state;
mod statement;

pub use accumulator::MaterialAccumulator;
pub use line::{strip_comment, LineTokens};
pub use statement::Statement;

use log::trace;

use crate::config::ParserConfig;
use crate::error::{MtlError, Notice};
use crate::material::Material;
use state::ParseState;

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLibrary {
    /// Materials in the order they were found
    pub materials: Vec<Material>,
    /// Skipped statements, in file order
    pub notices: Vec<Notice>,
}

impl ParsedLibrary {
    /// First material with the given name
    pub fn find(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Drop the notices and keep the materials
    pub fn into_materials(self) -> Vec<Material> {
        self.materials
    }
}

/// MTL text parser
///
/// Holds the input and configuration only; every call to [`MtlParser::parse`]
/// starts from fresh state.
#[derive(Debug, Clone)]
pub struct MtlParser<'a> {
    contents: &'a str,
    config: ParserConfig,
}

impl<'a> MtlParser<'a> {
    /// Create a parser over MTL file contents
    pub fn new(contents: &'a str) -> Self {
        Self {
            contents,
            config: ParserConfig::default(),
        }
    }

    /// Label diagnostics with a file name
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.config.source_name = Some(name.into());
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse using the configured default material name
    pub fn parse_default(&self) -> Result<ParsedLibrary, MtlError> {
        self.parse(&self.config.default_material_name)
    }

    /// Parse the contents
    ///
    /// # Arguments
    /// * `default_material_name` - Name of the material created when property
    ///   statements come before any `newmtl`
    ///
    /// # Returns
    /// All materials plus the notices for skipped statements, or the first
    /// fatal error
    pub fn parse(&self, default_material_name: &str) -> Result<ParsedLibrary, MtlError> {
        let mut state = ParseState::new(self.config.source_name.as_deref(), default_material_name);

        for (index, raw_line) in self.contents.lines().enumerate() {
            state.set_line(index + 1);

            let line = match LineTokens::parse(raw_line) {
                Some(line) => line,
                None => continue,
            };

            let statement = Statement::from_keyword(line.keyword)
                .ok_or_else(|| state.unrecognized(line.keyword))?;
            trace!("Line {}: {:?} {:?}", index + 1, statement, line.arguments);

            handlers::dispatch(&mut state, statement, &line.arguments)?;
        }

        Ok(state.finish())
    }
}

/// Parse MTL contents with the default settings and return the materials
pub fn parse_materials(contents: &str) -> Result<Vec<Material>, MtlError> {
    MtlParser::new(contents)
        .parse_default()
        .map(ParsedLibrary::into_materials)
}
