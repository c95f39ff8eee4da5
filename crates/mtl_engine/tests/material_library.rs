//! End-to-end parsing of realistic material libraries

use std::io::Write;

use approx::assert_relative_eq;
use mtl_engine::prelude::*;
use tempfile::NamedTempFile;

const SHIP_LIBRARY: &str = r#"
# Blender MTL File: 'ship.blend'
# Material Count: 3

newmtl Hull
Ns 225.000000
Ka 1.000000 1.000000 1.000000
Kd 0.800000 0.800000 0.800000
Ks 0.500000 0.500000 0.500000
Ke 0.000000 0.000000 0.000000
Ni 1.450000
d 1.000000
illum 2
map_Ka -o 0 0 0 -s 1 1 1 textures/hull_ao.png

newmtl   Glass   # cockpit
Ka xyz 0.1 0.1 0.1
d -halo 0.4
illum 6

newmtl Hull
illum 1
"#;

#[test]
fn test_unknown_vendor_statement_aborts_library() {
    // Ke is not part of the recognized statement set
    let error = parse_materials(SHIP_LIBRARY).unwrap_err();
    let context = error.context().unwrap();
    assert_eq!(context.line, 10);
    assert_eq!(context.material.as_deref(), Some("Hull"));
    assert!(error.to_string().contains("Unrecognized statement: Ke"));
}

#[test]
fn test_ship_library_without_vendor_statements() {
    let contents: String = SHIP_LIBRARY
        .lines()
        .filter(|line| !line.starts_with("Ke"))
        .map(|line| format!("{}\n", line))
        .collect();

    let library = MtlParser::new(&contents).parse_default().unwrap();
    assert_eq!(library.materials.len(), 3);

    let hull = &library.materials[0];
    assert_eq!(hull.name, "Hull");
    assert_eq!(hull.illumination(), Some(IlluminationModel::DiffuseSpecular));
    let ambient = hull.ambient_rgb().unwrap();
    assert_relative_eq!(ambient.x, 1.0);
    assert_relative_eq!(ambient.y, 1.0);
    assert_relative_eq!(ambient.z, 1.0);
    assert_eq!(hull.ambient_texture(), Some("textures/hull_ao.png"));
    assert_eq!(hull.diffuse_color, None);

    let glass = &library.materials[1];
    assert_eq!(glass.name, "Glass");
    assert_eq!(glass.ambient_color, Some(ColorValue::Xyz));
    assert_eq!(glass.illumination(), Some(IlluminationModel::Refraction));

    let second_hull = &library.materials[2];
    assert_eq!(second_hull.name, "Hull");
    assert_eq!(second_hull.illumination_model, Some(1));
    assert_eq!(library.find("Hull"), Some(hull));

    // Ns Kd Ks Ni d (Hull), Ka xyz and d (Glass)
    assert_eq!(library.notices.len(), 7);
}

#[test]
fn test_load_library_from_disk() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "Ka 0.2 0.2 0.2\nnewmtl Rock\nillum 1\nmap_Ka rock.png\n").unwrap();

    let config = ParserConfig::default().with_default_material_name("Terrain");
    let library = MaterialLoader::load_file(temp_file.path(), &config).unwrap();

    let names: Vec<_> = library.materials.iter().map(Material::name).collect();
    assert_eq!(names, vec!["Terrain", "Rock"]);

    let rock = library.find("Rock").unwrap();
    let texture = MaterialLoader::ambient_texture_path(rock, temp_file.path()).unwrap();
    assert_eq!(texture.file_name().unwrap(), "rock.png");
    assert_eq!(texture.parent(), temp_file.path().parent());
}

#[test]
fn test_parsers_are_independent() {
    let first = MtlParser::new("newmtl a\nillum 1\n");
    let second = MtlParser::new("illum 2\n");

    let a = first.parse_default().unwrap();
    let b = second.parse("fallback").unwrap();
    let a_again = first.parse_default().unwrap();

    assert_eq!(a, a_again);
    assert_eq!(b.materials[0].name, "fallback");
    assert_eq!(a.materials.len(), 1);
}
