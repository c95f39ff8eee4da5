//! Math utilities and types
//!
//! Color triples in material libraries are plain three component vectors.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// RGB reflectance triple (red, green, blue)
///
/// Components are conventionally in `0.0..=1.0` but the parser does not clamp them.
pub type Color = Vec3;

/// Build a color from its red, green and blue components
pub fn rgb(red: f32, green: f32, blue: f32) -> Color {
    Color::new(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_component_order() {
        let color = rgb(0.1, 0.2, 0.3);
        assert_eq!(color.x, 0.1);
        assert_eq!(color.y, 0.2);
        assert_eq!(color.z, 0.3);
    }
}
