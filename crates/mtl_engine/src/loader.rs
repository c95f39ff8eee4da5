//! Material loader with MTL file support
//!
//! Reads .mtl files from disk and hands their contents to [`MtlParser`].

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::ParserConfig;
use crate::error::MtlError;
use crate::material::Material;
use crate::parser::{MtlParser, ParsedLibrary};

/// Loads material libraries from the file system
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load and parse an MTL file
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file
    /// * `config` - Parser settings. When no source name is configured the
    ///   file name is used in diagnostics.
    ///
    /// # Returns
    /// The parsed library, or the IO / parse error
    pub fn load_file(
        mtl_path: impl AsRef<Path>,
        config: &ParserConfig,
    ) -> Result<ParsedLibrary, MtlError> {
        let mtl_path = mtl_path.as_ref();

        let contents = fs::read_to_string(mtl_path).map_err(|source| MtlError::Io {
            path: mtl_path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {:?}", contents.len(), mtl_path);

        let mut config = config.clone();
        if config.source_name.is_none() {
            config.source_name = Some(Self::source_label(mtl_path));
        }

        let library = MtlParser::new(&contents).with_config(config).parse_default()?;
        info!(
            "Loaded {} material(s) from {:?} ({} statement(s) skipped)",
            library.materials.len(),
            mtl_path,
            library.notices.len()
        );
        Ok(library)
    }

    /// Load all materials from an MTL file with default settings
    pub fn load_materials(mtl_path: impl AsRef<Path>) -> Result<Vec<Material>, MtlError> {
        Self::load_file(mtl_path, &ParserConfig::default()).map(ParsedLibrary::into_materials)
    }

    /// Resolve the ambient texture of a material relative to its MTL file
    pub fn ambient_texture_path(material: &Material, mtl_path: impl AsRef<Path>) -> Option<PathBuf> {
        let mtl_dir = mtl_path.as_ref().parent().unwrap_or_else(|| Path::new(""));
        material
            .ambient_texture()
            .map(|texture| Self::resolve_texture_path(mtl_dir, texture))
    }

    /// Resolve texture path relative to MTL file directory
    pub fn resolve_texture_path(base_dir: &Path, texture_path: &str) -> PathBuf {
        let texture_path = Path::new(texture_path);

        if texture_path.is_absolute() {
            return texture_path.to_path_buf();
        }

        base_dir.join(texture_path)
    }

    fn source_label(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
    }
}
