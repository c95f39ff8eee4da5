//! MTL statement keywords

/// Every statement keyword the parser recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    /// `newmtl`
    NewMaterial,
    /// `illum`
    Illumination,
    /// `Ka`
    AmbientColor,
    /// `Kd`
    DiffuseColor,
    /// `Ks`
    SpecularColor,
    /// `Tf`
    TransmissionFilter,
    /// `Ns`
    SpecularExponent,
    /// `Ni`
    OpticalDensity,
    /// `d`
    Dissolve,
    /// `sharpness`
    Sharpness,
    /// `map_Ka`
    AmbientMap,
    /// `map_Kd`
    DiffuseMap,
    /// `map_Ks`
    SpecularMap,
    /// `map_Ns`
    SpecularExponentMap,
    /// `disp`
    DisplacementMap,
    /// `decal`
    DecalMap,
    /// `bump`
    BumpMap,
    /// `refl`
    ReflectionMap,
}

impl Statement {
    /// Look up a keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let statement = match keyword.to_ascii_lowercase().as_str() {
            "newmtl" => Self::NewMaterial,
            "illum" => Self::Illumination,
            "ka" => Self::AmbientColor,
            "kd" => Self::DiffuseColor,
            "ks" => Self::SpecularColor,
            "tf" => Self::TransmissionFilter,
            "ns" => Self::SpecularExponent,
            "ni" => Self::OpticalDensity,
            "d" => Self::Dissolve,
            "sharpness" => Self::Sharpness,
            "map_ka" => Self::AmbientMap,
            "map_kd" => Self::DiffuseMap,
            "map_ks" => Self::SpecularMap,
            "map_ns" => Self::SpecularExponentMap,
            "disp" => Self::DisplacementMap,
            "decal" => Self::DecalMap,
            "bump" => Self::BumpMap,
            "refl" => Self::ReflectionMap,
            _ => return None,
        };
        Some(statement)
    }

    /// Keyword in its conventional spelling
    pub fn keyword(self) -> &'static str {
        match self {
            Self::NewMaterial => "newmtl",
            Self::Illumination => "illum",
            Self::AmbientColor => "Ka",
            Self::DiffuseColor => "Kd",
            Self::SpecularColor => "Ks",
            Self::TransmissionFilter => "Tf",
            Self::SpecularExponent => "Ns",
            Self::OpticalDensity => "Ni",
            Self::Dissolve => "d",
            Self::Sharpness => "sharpness",
            Self::AmbientMap => "map_Ka",
            Self::DiffuseMap => "map_Kd",
            Self::SpecularMap => "map_Ks",
            Self::SpecularExponentMap => "map_Ns",
            Self::DisplacementMap => "disp",
            Self::DecalMap => "decal",
            Self::BumpMap => "bump",
            Self::ReflectionMap => "refl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(Statement::from_keyword("Ka"), Some(Statement::AmbientColor));
        assert_eq!(Statement::from_keyword("KA"), Some(Statement::AmbientColor));
        assert_eq!(Statement::from_keyword("MAP_Ka"), Some(Statement::AmbientMap));
        assert_eq!(Statement::from_keyword("NewMtl"), Some(Statement::NewMaterial));
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(Statement::from_keyword("foobar"), None);
        assert_eq!(Statement::from_keyword("map_Bump"), None);
    }

    #[test]
    fn test_keyword_roundtrip() {
        let all = [
            Statement::NewMaterial,
            Statement::Illumination,
            Statement::AmbientColor,
            Statement::DiffuseColor,
            Statement::SpecularColor,
            Statement::TransmissionFilter,
            Statement::SpecularExponent,
            Statement::OpticalDensity,
            Statement::Dissolve,
            Statement::Sharpness,
            Statement::AmbientMap,
            Statement::DiffuseMap,
            Statement::SpecularMap,
            Statement::SpecularExponentMap,
            Statement::DisplacementMap,
            Statement::DecalMap,
            Statement::BumpMap,
            Statement::ReflectionMap,
        ];
        for statement in all {
            assert_eq!(Statement::from_keyword(statement.keyword()), Some(statement));
        }
    }
}
