//! Ordered material collection with a current material
//!
//! The current material is always the most recently appended record.

use log::debug;

use crate::material::Material;

/// Collects materials in discovery order
#[derive(Debug)]
pub struct MaterialAccumulator {
    default_name: String,
    materials: Vec<Material>,
}

impl MaterialAccumulator {
    /// Create an empty accumulator
    ///
    /// `default_name` names the material created by [`Self::current_or_default`]
    /// when no `newmtl` came first.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            materials: Vec::new(),
        }
    }

    /// The current material, if any exists
    pub fn current(&self) -> Option<&Material> {
        self.materials.last()
    }

    /// The current material, creating the default one first if needed
    pub fn current_or_default(&mut self) -> &mut Material {
        if self.materials.is_empty() {
            debug!("Creating default material '{}'", self.default_name);
            self.materials.push(Material::new(self.default_name.clone()));
        }
        let last = self.materials.len() - 1;
        &mut self.materials[last]
    }

    /// Append a new material and make it current
    ///
    /// Existing materials with the same name are left untouched.
    pub fn begin_new(&mut self, name: impl Into<String>) -> &mut Material {
        let material = Material::new(name);
        debug!("Creating material '{}'", material.name);
        self.materials.push(material);
        let last = self.materials.len() - 1;
        &mut self.materials[last]
    }

    /// Take the collected materials
    pub fn into_materials(self) -> Vec<Material> {
        self.materials
    }
}
