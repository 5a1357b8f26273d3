// Surface-of-revolution meshes for the characteristic surfaces

use serde::Serialize;
use std::f64::consts::PI;

use crate::coordinates::bl_to_cartesian;
use crate::types::BlackHole;

// Grid resolution along each angular parameter
pub const THETA_SAMPLES: usize = 100;
pub const PHI_SAMPLES: usize = 100;

// ============================================================================
// RADIUS PROFILES
// ============================================================================

// Which ergosphere branch a profile samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErgoBranch {
    Outer,
    Inner,
}

// Radius as a function of polar angle
//
// Five of the surfaces are spheres of constant Boyer-Lindquist radius;
// the ergosphere branches vary with θ. Representing both as one tagged
// value lets the mesh generator consume them uniformly instead of taking
// a closure.
#[derive(Debug, Clone, Copy)]
pub enum RadiusProfile {
    // Fixed radius, independent of angle
    Constant(f64),

    // Angle-dependent ergosphere branch of the given hole
    Ergosphere { hole: BlackHole, branch: ErgoBranch },
}

impl RadiusProfile {
    // Radius at polar angle θ
    #[inline]
    pub fn at(&self, theta: f64) -> f64 {
        match self {
            Self::Constant(r) => *r,
            Self::Ergosphere { hole, branch } => {
                let (outer, inner) = hole.ergosphere_radii(theta);
                match branch {
                    ErgoBranch::Outer => outer,
                    ErgoBranch::Inner => inner,
                }
            }
        }
    }
}

// ============================================================================
// SURFACE GRID
// ============================================================================

// Rectangular grid of 3D points over (φ, θ)
//
// Rows are lines of constant φ sweeping θ over [0, π]; a full shell sweeps
// φ over [0, 2π] (with the seam duplicated, so row 0 equals the last row),
// an open half shell stops at π. Rebuilt from scratch on every parameter
// change and discarded after display.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceGrid {
    pub n_theta: usize,
    pub n_phi: usize,
    pub half: bool,
    points: Vec<[f64; 3]>,
}

impl SurfaceGrid {
    // Revolve a radius profile around the spin axis
    pub fn revolve(profile: RadiusProfile, a: f64, half: bool) -> Self {
        let phi_max = if half { PI } else { 2.0 * PI };
        let mut points = Vec::with_capacity(PHI_SAMPLES * THETA_SAMPLES);

        for i in 0..PHI_SAMPLES {
            let phi = phi_max * i as f64 / (PHI_SAMPLES - 1) as f64;
            for j in 0..THETA_SAMPLES {
                let theta = PI * j as f64 / (THETA_SAMPLES - 1) as f64;
                let r = profile.at(theta);
                points.push(bl_to_cartesian(r, theta, phi, a));
            }
        }

        Self {
            n_theta: THETA_SAMPLES,
            n_phi: PHI_SAMPLES,
            half,
            points,
        }
    }

    // Point at row i_phi, column j_theta
    #[inline]
    pub fn point(&self, i_phi: usize, j_theta: usize) -> [f64; 3] {
        self.points[i_phi * self.n_theta + j_theta]
    }

    // Rows of constant φ, each sweeping θ
    pub fn rows(&self) -> impl Iterator<Item = &[[f64; 3]]> {
        self.points.chunks(self.n_theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_grid_dimensions() {
        let grid = SurfaceGrid::revolve(RadiusProfile::Constant(2.0), 0.0, false);
        assert_eq!(grid.n_phi, 100);
        assert_eq!(grid.n_theta, 100);
        assert_eq!(grid.rows().count(), 100);
    }

    #[test]
    fn test_full_shell_is_periodic_in_phi() {
        // φ = 0 and φ = 2π must land on the same points
        let grid = SurfaceGrid::revolve(RadiusProfile::Constant(1.6), 0.8, false);
        for j in 0..grid.n_theta {
            let first = grid.point(0, j);
            let last = grid.point(grid.n_phi - 1, j);
            for k in 0..3 {
                assert!(
                    (first[k] - last[k]).abs() < 1e-9,
                    "seam mismatch at θ index {} component {}",
                    j,
                    k
                );
            }
        }
    }

    #[test]
    fn test_half_shell_stops_at_pi() {
        // The last row of a half shell sits in the y = 0 half plane
        let grid = SurfaceGrid::revolve(RadiusProfile::Constant(1.6), 0.8, true);
        for j in 0..grid.n_theta {
            let p = grid.point(grid.n_phi - 1, j);
            assert!(p[1].abs() < 1e-9, "half shell should end on the x-z plane");
            assert!(p[0] <= 1e-9, "φ = π points should have non-positive x");
        }
    }

    #[test]
    fn test_constant_profile_height_equals_radius() {
        let grid = SurfaceGrid::revolve(RadiusProfile::Constant(2.5), 0.6, false);
        // θ = 0 row start is the north pole at z = r
        let pole = grid.point(0, 0);
        assert!((pole[2] - 2.5).abs() < 1e-12, "pole height should equal the profile radius");
    }

    #[test]
    fn test_ergosphere_profile_meets_horizon_at_pole() {
        let hole = BlackHole::with_spin(0.8);
        let profile = RadiusProfile::Ergosphere { hole, branch: ErgoBranch::Outer };
        assert!(
            (profile.at(0.0) - hole.horizons().0).abs() < 1e-12,
            "outer ergosphere should touch r+ at the pole"
        );
        assert!(
            (profile.at(FRAC_PI_2) - 2.0).abs() < 1e-12,
            "outer ergosphere should reach 2M on the equator"
        );

        let inner = RadiusProfile::Ergosphere { hole, branch: ErgoBranch::Inner };
        assert!(inner.at(FRAC_PI_2).abs() < 1e-12, "inner branch should pinch to 0 on the equator");
    }

    #[test]
    fn test_invalid_spin_builds_nan_grid_without_panicking() {
        let hole = BlackHole::with_spin(1.5);
        let grid = SurfaceGrid::revolve(
            RadiusProfile::Constant(hole.horizons().0),
            hole.a(),
            false,
        );
        assert!(grid.point(10, 10)[0].is_nan(), "NaN radius should produce NaN vertices");
    }
}
