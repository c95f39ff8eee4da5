//! Material records produced by the MTL parser
//!
//! A [`Material`] holds the shading parameters of one `newmtl` block. Only a
//! subset of the format is interpreted; the remaining properties exist as
//! slots that stay `None` so callers can rely on a stable layout.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Color;

/// How a color statement (`Ka`, `Kd`, `Ks`, `Tf`) specified its value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorValue {
    /// `Ka r g b`
    Rgb(Color),
    /// `Ka spectral file.rfl [factor]`, seen but not evaluated
    Spectral,
    /// `Ka xyz x y z`, seen but not evaluated
    Xyz,
}

impl ColorValue {
    /// The RGB triple, if the color was given in RGB form
    pub fn rgb(&self) -> Option<Color> {
        match self {
            Self::Rgb(color) => Some(*color),
            Self::Spectral | Self::Xyz => None,
        }
    }
}

/// Illumination models defined by the MTL format (`illum 0` through `illum 10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IlluminationModel {
    /// 0: color = Kd, no lighting
    Constant,
    /// 1: Lambertian diffuse with ambient
    Diffuse,
    /// 2: Lambertian diffuse plus Blinn-Phong specular
    DiffuseSpecular,
    /// 3: model 2 plus ray traced reflection
    Reflection,
    /// 4: glass, ray traced reflection
    GlassReflection,
    /// 5: Fresnel reflection
    FresnelReflection,
    /// 6: refraction with ray traced reflection
    Refraction,
    /// 7: refraction with Fresnel reflection
    FresnelRefraction,
    /// 8: reflection without ray tracing
    ReflectionNoRayTrace,
    /// 9: glass without ray tracing
    GlassNoRayTrace,
    /// 10: casts shadows onto invisible surfaces
    ShadowMatte,
}

impl IlluminationModel {
    /// Map the number used by an `illum` statement
    pub fn from_number(number: u32) -> Option<Self> {
        let model = match number {
            0 => Self::Constant,
            1 => Self::Diffuse,
            2 => Self::DiffuseSpecular,
            3 => Self::Reflection,
            4 => Self::GlassReflection,
            5 => Self::FresnelReflection,
            6 => Self::Refraction,
            7 => Self::FresnelRefraction,
            8 => Self::ReflectionNoRayTrace,
            9 => Self::GlassNoRayTrace,
            10 => Self::ShadowMatte,
            _ => return None,
        };
        Some(model)
    }
}

/// One named material from an MTL file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name (`newmtl` argument or the configured default)
    pub name: String,
    /// Illumination model number (`illum`)
    pub illumination_model: Option<u32>,
    /// Ambient color (`Ka`)
    pub ambient_color: Option<ColorValue>,
    /// Diffuse color (`Kd`), not evaluated yet
    pub diffuse_color: Option<ColorValue>,
    /// Specular color (`Ks`), not evaluated yet
    pub specular_color: Option<ColorValue>,
    /// Transmission filter (`Tf`), not evaluated yet
    pub transmission_filter: Option<ColorValue>,
    /// Specular exponent (`Ns`), not evaluated yet
    pub specular_exponent: Option<f32>,
    /// Optical density (`Ni`), not evaluated yet
    pub optical_density: Option<f32>,
    /// Dissolve factor (`d`), not evaluated yet
    pub dissolve: Option<f32>,
    /// Reflection sharpness (`sharpness`), not evaluated yet
    pub sharpness: Option<f32>,
    /// Ambient texture file (`map_Ka`)
    pub ambient_texture: Option<String>,
    /// Diffuse texture file (`map_Kd`), not evaluated yet
    pub diffuse_texture: Option<String>,
    /// Specular texture file (`map_Ks`), not evaluated yet
    pub specular_texture: Option<String>,
    /// Specular exponent texture file (`map_Ns`), not evaluated yet
    pub specular_exponent_texture: Option<String>,
    /// Displacement map (`disp`), not evaluated yet
    pub displacement_map: Option<String>,
    /// Decal map (`decal`), not evaluated yet
    pub decal_map: Option<String>,
    /// Bump map (`bump`), not evaluated yet
    pub bump_map: Option<String>,
    /// Reflection map (`refl`), not evaluated yet
    pub reflection_map: Option<String>,
}

impl Material {
    /// Create a material with every property unset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            illumination_model: None,
            ambient_color: None,
            diffuse_color: None,
            specular_color: None,
            transmission_filter: None,
            specular_exponent: None,
            optical_density: None,
            dissolve: None,
            sharpness: None,
            ambient_texture: None,
            diffuse_texture: None,
            specular_texture: None,
            specular_exponent_texture: None,
            displacement_map: None,
            decal_map: None,
            bump_map: None,
            reflection_map: None,
        }
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Illumination model, if `illum` named one of the defined models
    pub fn illumination(&self) -> Option<IlluminationModel> {
        self.illumination_model.and_then(IlluminationModel::from_number)
    }

    /// Ambient RGB color, if `Ka` was given in RGB form
    pub fn ambient_rgb(&self) -> Option<Color> {
        self.ambient_color.as_ref().and_then(ColorValue::rgb)
    }

    /// Ambient texture file reference (`map_Ka`)
    pub fn ambient_texture(&self) -> Option<&str> {
        self.ambient_texture.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::rgb;

    #[test]
    fn test_new_material_is_unset() {
        let material = Material::new("Brick");
        assert_eq!(material.name(), "Brick");
        assert_eq!(material.illumination_model, None);
        assert_eq!(material.ambient_color, None);
        assert_eq!(material.ambient_texture(), None);
        assert_eq!(material.bump_map, None);
    }

    #[test]
    fn test_illumination_model_mapping() {
        assert_eq!(IlluminationModel::from_number(0), Some(IlluminationModel::Constant));
        assert_eq!(IlluminationModel::from_number(2), Some(IlluminationModel::DiffuseSpecular));
        assert_eq!(IlluminationModel::from_number(10), Some(IlluminationModel::ShadowMatte));
        assert_eq!(IlluminationModel::from_number(11), None);
    }

    #[test]
    fn test_illumination_out_of_range() {
        let mut material = Material::new("m");
        material.illumination_model = Some(42);
        assert_eq!(material.illumination(), None);
    }

    #[test]
    fn test_color_value_accessors() {
        let color = ColorValue::Rgb(rgb(0.5, 0.25, 1.0));
        assert_eq!(color.rgb(), Some(rgb(0.5, 0.25, 1.0)));
        assert_eq!(ColorValue::Spectral.rgb(), None);
        assert_eq!(ColorValue::Xyz.rgb(), None);
    }
}
