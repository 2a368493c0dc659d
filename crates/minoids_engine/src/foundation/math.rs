//! Math utilities and types
//!
//! Provides the 2D math types used by components and systems.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Construct a [`Vec2`] from its components
#[inline]
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Clamp the length of `v` to at most `max_length`, keeping its direction
pub fn clamp_magnitude(v: Vec2, max_length: f32) -> Vec2 {
    let length = v.magnitude();
    if length > max_length && length > 0.0 {
        v * (max_length / length)
    } else {
        v
    }
}

/// Move `value` toward zero by `step`, snapping to zero once within `step`
pub fn approach_zero(value: f32, step: f32) -> f32 {
    if value.abs() <= step {
        0.0
    } else {
        value - step.copysign(value)
    }
}

/// Rotate `v` counter-clockwise by `angle` radians
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Cubic ease-out over `t` in `[0, 1]`; values outside are clamped
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Whether a circle overlaps an axis-aligned rectangle.
///
/// The rectangle is given by its top-left corner and size; touching counts.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect_origin: Vec2, rect_size: Vec2) -> bool {
    let closest_x = center.x.clamp(rect_origin.x, rect_origin.x + rect_size.x);
    let closest_y = center.y.clamp(rect_origin.y, rect_origin.y + rect_size.y);
    let dx = center.x - closest_x;
    let dy = center.y - closest_y;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_magnitude() {
        let clamped = clamp_magnitude(vec2(3.0, 4.0), 2.5);
        assert_relative_eq!(clamped.magnitude(), 2.5, epsilon = 1e-5);
        assert_relative_eq!(clamped.x / clamped.y, 0.75, epsilon = 1e-5);

        let untouched = clamp_magnitude(vec2(1.0, 0.0), 2.0);
        assert_eq!(untouched, vec2(1.0, 0.0));
    }

    #[test]
    fn test_approach_zero() {
        assert_eq!(approach_zero(1.0, 0.25), 0.75);
        assert_eq!(approach_zero(-1.0, 0.25), -0.75);
        assert_eq!(approach_zero(0.2, 0.25), 0.0);
        assert_eq!(approach_zero(0.0, 0.25), 0.0);
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_relative_eq!(ease_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        assert_relative_eq!(ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate(vec2(1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_circle_rect_overlap() {
        let origin = vec2(0.0, 0.0);
        let size = vec2(10.0, 10.0);
        assert!(circle_overlaps_rect(vec2(5.0, 5.0), 3.0, origin, size));
        assert!(circle_overlaps_rect(vec2(12.0, 5.0), 2.0, origin, size));
        assert!(!circle_overlaps_rect(vec2(13.0, 13.0), 3.0, origin, size));
        assert!(!circle_overlaps_rect(vec2(-5.0, 5.0), 4.9, origin, size));
    }
}
