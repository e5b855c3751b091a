//! Gradient geometry: angle to axis-endpoint conversion.
//!
//! The gradient axis always passes through the canvas center, rotated by the
//! requested angle. The raster path consumes the endpoints directly; the
//! vector path expresses the same rotation as a transform of `angle − 90` on
//! a unit axis. Both must agree visually for every angle.

/// Axis endpoints of a linear gradient, in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientAxis {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl GradientAxis {
    /// Midpoint of the axis. Always the canvas center by construction.
    pub fn midpoint(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Euclidean length of the axis. Invariant under the angle.
    pub fn length(&self) -> f32 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Convert a gradient angle in degrees to axis endpoints for a canvas of the
/// given size.
pub fn gradient_endpoints(angle_degrees: f32, width: f32, height: f32) -> GradientAxis {
    let rad = angle_degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    GradientAxis {
        x1: width / 2.0 * (1.0 - cos),
        y1: height / 2.0 * (1.0 - sin),
        x2: width / 2.0 * (1.0 + cos),
        y2: height / 2.0 * (1.0 + sin),
    }
}

/// Rotation in degrees that expresses the same gradient axis as a transform
/// on a left-to-right unit axis, as used by the vector output.
pub fn vector_rotation(angle_degrees: f32) -> f32 {
    angle_degrees - 90.0
}
