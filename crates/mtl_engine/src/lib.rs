//! # MTL Engine
//!
//! Parser for Wavefront MTL (Material Template Library) files.
//!
//! ## Features
//!
//! - **Material records**: ordered, one per `newmtl` block, duplicates kept
//! - **Implicit default material**: properties before the first `newmtl` are not lost
//! - **Two failure classes**: fatal [`MtlError`] for malformed supported
//!   statements, non-fatal [`Notice`] for recognized statements that are not evaluated
//! - **Configurable**: default material name and diagnostic label via [`ParserConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mtl_engine::prelude::*;
//!
//! let library = MtlParser::new("newmtl brick\nKa 0.2 0.1 0.1\nmap_Ka brick.png\n")
//!     .with_source_name("walls.mtl")
//!     .parse_default()?;
//!
//! let brick = library.find("brick").unwrap();
//! assert_eq!(brick.ambient_texture(), Some("brick.png"));
//! # Ok::<(), MtlError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod error;
pub mod material;
pub mod parser;
pub mod loader;

pub use config::{Config, ConfigError, ParserConfig};
pub use error::{ErrorContext, MtlError, Notice};
pub use loader::MaterialLoader;
pub use material::{ColorValue, IlluminationModel, Material};
pub use parser::{parse_materials, MtlParser, ParsedLibrary, Statement};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        Config, ParserConfig,
        ErrorContext, MtlError, Notice,
        ColorValue, IlluminationModel, Material,
        MaterialLoader,
        MtlParser, ParsedLibrary, parse_materials,
        foundation::math::{Color, Vec3},
    };
}
