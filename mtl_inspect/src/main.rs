//! MTL inspector
//!
//! Parses a Wavefront .mtl file and prints the resulting materials as RON,
//! followed by any statements the parser skipped.
//!
//! Usage: mtl_inspect ship.mtl [--default-name Hull] [--config parser.toml] [--strict]

use std::path::PathBuf;

use clap::Parser;
use log::info;
use thiserror::Error;

use mtl_engine::foundation::logging;
use mtl_engine::{Config, ConfigError, MaterialLoader, MtlError, ParserConfig};

/// CLI options.
#[derive(Debug, Parser)]
#[command(version, about = "Print the materials defined in a Wavefront MTL file")]
struct CliOpt {
    /// MTL file
    mtl_path: PathBuf,

    /// Name for properties that appear before the first `newmtl`
    #[arg(long)]
    default_name: Option<String>,

    /// Parser configuration file (.toml or .ron)
    #[arg(long)]
    config: Option<String>,

    /// Fail when any statement was skipped
    #[arg(long)]
    strict: bool,
}

#[derive(Error, Debug)]
enum InspectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] MtlError),

    #[error("Failed to format materials: {0}")]
    Format(#[from] ron::Error),

    #[error("{0} statement(s) were not evaluated")]
    Strict(usize),
}

fn main() {
    logging::init_with_level(log::LevelFilter::Info);

    let opt = CliOpt::parse();
    info!("version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&opt) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(opt: &CliOpt) -> Result<(), InspectError> {
    let mut config = match &opt.config {
        Some(path) => ParserConfig::load_from_file(path)?,
        None => ParserConfig::default(),
    };
    if let Some(name) = &opt.default_name {
        config.default_material_name = name.clone();
    }

    let library = MaterialLoader::load_file(&opt.mtl_path, &config)?;

    let pretty = ron::ser::PrettyConfig::new().struct_names(true);
    println!("{}", ron::ser::to_string_pretty(&library.materials, pretty)?);

    for notice in &library.notices {
        println!("skipped: {}", notice);
    }

    if opt.strict && !library.notices.is_empty() {
        return Err(InspectError::Strict(library.notices.len()));
    }
    Ok(())
}
