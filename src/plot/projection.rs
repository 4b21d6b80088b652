//! Orthographic camera for 3D scenes.

/// Degrees per rotation step.
const STEP_DEGREES: f64 = 15.0;

/// Camera on a sphere around the origin, looking at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation about the z axis, radians.
    pub azimuth: f64,
    /// Angle above the xy plane, radians.
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: (-60.0f64).to_radians(),
            elevation: 30.0f64.to_radians(),
        }
    }
}

impl Camera {
    /// Project a 3D point to screen coordinates.
    pub fn project(&self, p: [f64; 3]) -> (f64, f64) {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();

        // Right vector: (-sin(a), cos(a), 0)
        let screen_x = -p[0] * sa + p[1] * ca;
        // Up vector: (-cos(a)*sin(e), -sin(a)*sin(e), cos(e))
        let screen_y = -p[0] * ca * se - p[1] * sa * se + p[2] * ce;

        (screen_x, screen_y)
    }

    /// Distance along the viewing direction; larger is further away.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        -(p[0] * ce * ca + p[1] * ce * sa + p[2] * se)
    }

    /// Orbit by whole steps; elevation stays within ±90°.
    pub fn orbit(&mut self, azimuth_steps: i32, elevation_steps: i32) {
        let step = STEP_DEGREES.to_radians();
        self.azimuth = (self.azimuth + f64::from(azimuth_steps) * step)
            .rem_euclid(std::f64::consts::TAU);
        let limit = std::f64::consts::FRAC_PI_2;
        self.elevation = (self.elevation + f64::from(elevation_steps) * step).clamp(-limit, limit);
    }

    /// Azimuth and elevation in degrees, for display.
    pub fn degrees(&self) -> (f64, f64) {
        let mut az = self.azimuth.to_degrees();
        if az > 180.0 {
            az -= 360.0;
        }
        (az, self.elevation.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn top_down_view_keeps_plane() {
        let cam = Camera {
            azimuth: -std::f64::consts::FRAC_PI_2,
            elevation: std::f64::consts::FRAC_PI_2,
        };
        let (sx, sy) = cam.project([1.0, 2.0, 5.0]);
        assert!(close(sx, 1.0));
        assert!(close(sy, 2.0));
    }

    #[test]
    fn z_points_up_from_the_side() {
        let cam = Camera {
            azimuth: 0.0,
            elevation: 0.0,
        };
        let (sx, sy) = cam.project([0.0, 0.0, 3.0]);
        assert!(close(sx, 0.0));
        assert!(close(sy, 3.0));
        assert!(cam.depth([1.0, 0.0, 0.0]) < cam.depth([-1.0, 0.0, 0.0]));
    }

    #[test]
    fn orbit_wraps_and_clamps() {
        let mut cam = Camera::default();
        cam.orbit(0, 100);
        assert!(close(cam.elevation, std::f64::consts::FRAC_PI_2));
        cam.orbit(24, 0);
        let (az, _) = cam.degrees();
        assert!(close(az, -60.0));
    }
}
