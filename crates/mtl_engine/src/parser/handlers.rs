//! Statement handlers
//!
//! Supported statements that are malformed abort the parse. Recognized
//! statements that are not evaluated are recorded as notices and skipped.

use std::str::FromStr;

use super::state::ParseState;
use super::statement::Statement;
use crate::error::MtlError;
use crate::foundation::math::rgb;
use crate::material::ColorValue;

/// Route a statement to its handler
pub(crate) fn dispatch(
    state: &mut ParseState<'_>,
    statement: Statement,
    args: &[&str],
) -> Result<(), MtlError> {
    match statement {
        Statement::NewMaterial => new_material(state, args),
        Statement::Illumination => illumination(state, args),
        Statement::AmbientColor => ambient_color(state, args),
        Statement::AmbientMap => ambient_map(state, args),
        Statement::DiffuseColor
        | Statement::SpecularColor
        | Statement::TransmissionFilter
        | Statement::SpecularExponent
        | Statement::OpticalDensity
        | Statement::Dissolve
        | Statement::Sharpness
        | Statement::DiffuseMap
        | Statement::SpecularMap
        | Statement::SpecularExponentMap
        | Statement::DisplacementMap
        | Statement::DecalMap
        | Statement::BumpMap
        | Statement::ReflectionMap => {
            skip(state, statement);
            Ok(())
        }
    }
}

// newmtl material_name
fn new_material(state: &mut ParseState<'_>, args: &[&str]) -> Result<(), MtlError> {
    let name = args.first().ok_or_else(|| {
        state.missing_arguments(Statement::NewMaterial, 1, 0, "newmtl <material name>")
    })?;
    state.accumulator().begin_new(*name);
    Ok(())
}

// illum 2
fn illumination(state: &mut ParseState<'_>, args: &[&str]) -> Result<(), MtlError> {
    let token = args.first().ok_or_else(|| {
        state.missing_arguments(Statement::Illumination, 1, 0, "illum <number>")
    })?;
    let model = parse_number::<u32>(state, Statement::Illumination, token)?;
    state.current_or_default().illumination_model = Some(model);
    Ok(())
}

// Ka r g b
// Ka spectral file.rfl factor
// Ka xyz x y z
fn ambient_color(state: &mut ParseState<'_>, args: &[&str]) -> Result<(), MtlError> {
    let color = color_value(state, Statement::AmbientColor, args)?;
    state.current_or_default().ambient_color = Some(color);
    Ok(())
}

fn color_value(
    state: &mut ParseState<'_>,
    statement: Statement,
    args: &[&str],
) -> Result<ColorValue, MtlError> {
    match args.first() {
        Some(method) if method.eq_ignore_ascii_case("spectral") => {
            state.current_or_default();
            state.not_implemented(
                statement,
                format!("{} spectral <filename> <factor>", statement.keyword()),
            );
            return Ok(ColorValue::Spectral);
        }
        Some(method) if method.eq_ignore_ascii_case("xyz") => {
            state.current_or_default();
            state.not_implemented(statement, format!("{} xyz <x> <y> <z>", statement.keyword()));
            return Ok(ColorValue::Xyz);
        }
        _ => {}
    }

    if args.len() < 3 {
        return Err(state.missing_arguments(statement, 3, args.len(), "Ka/Kd/Ks <r> <g> <b>"));
    }
    let red = parse_number(state, statement, args[0])?;
    let green = parse_number(state, statement, args[1])?;
    let blue = parse_number(state, statement, args[2])?;
    Ok(ColorValue::Rgb(rgb(red, green, blue)))
}

// map_Ka [options] textureFile
// map_Ka -s 1 1 1 -o 0 0 0 -mm 0 1 file.mpc
fn ambient_map(state: &mut ParseState<'_>, args: &[&str]) -> Result<(), MtlError> {
    let file = args.last().ok_or_else(|| {
        state.missing_arguments(Statement::AmbientMap, 1, 0, "map_Ka [options] <texture file>")
    })?;
    // Option tokens before the file name are not evaluated
    state.current_or_default().ambient_texture = Some((*file).to_string());
    Ok(())
}

fn skip(state: &mut ParseState<'_>, statement: Statement) {
    state.current_or_default();
    state.not_implemented(statement, statement.keyword());
}

fn parse_number<T: FromStr>(
    state: &ParseState<'_>,
    statement: Statement,
    token: &str,
) -> Result<T, MtlError> {
    token
        .parse()
        .map_err(|_| state.invalid_number(statement, token))
}
