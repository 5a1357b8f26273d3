// Equatorial guide curves, label placement, and the ring singularity

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::coordinates::equatorial_radius;
use crate::types::{BlackHole, SurfaceKind};

// Sample counts for the flattened curves
pub const EQUATOR_SAMPLES: usize = 200;
pub const SINGULARITY_SAMPLES: usize = 100;

// Azimuth of the Schwarzschild reference labels (315°)
const REFERENCE_LABEL_ANGLE: f64 = 7.0 * PI / 4.0;

// Azimuth of the singularity label on the ring
const SINGULARITY_LABEL_ANGLE: f64 = 3.8 * PI;

// ============================================================================
// EQUATORIAL CURVES
// ============================================================================

// Circle where a surface of Boyer-Lindquist radius r crosses the equator
//
// Embedded radius is √(r² + a²), consistent with the surface meshes, so a
// curve always hugs its shell. Closed: the first and last samples coincide.
pub fn equator_curve(r: f64, a: f64) -> Vec<[f64; 3]> {
    let rho = equatorial_radius(r, a);
    (0..EQUATOR_SAMPLES)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / (EQUATOR_SAMPLES - 1) as f64;
            [rho * phi.cos(), rho * phi.sin(), 0.0]
        })
        .collect()
}

// Largest equatorial radius among all characteristic surfaces
//
// The label heuristic scales offsets by how close each surface sits to
// this maximum. For sub-extremal spins this is the retrograde ISCO.
pub fn max_equatorial_radius(hole: &BlackHole) -> f64 {
    SurfaceKind::ALL
        .iter()
        .map(|kind| kind.equatorial_radius(hole))
        .fold(f64::NEG_INFINITY, f64::max)
}

// ============================================================================
// LABEL PLACEMENT
// ============================================================================

// Per-surface vertical boost factors for label stacking
//
// Display heuristic, not physics: labels for surfaces close to the largest
// radius get lifted further off the plane so stacked annotations stay
// readable. Kept as configuration data so the table can be tuned without
// touching the geometry code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOffsets {
    // Base lift applied to every label
    pub base: f64,
    // Weight of the closeness-to-maximum term
    pub scale: f64,
    pub rs_plus: f64,
    pub rs_minus: f64,
    pub re_plus: f64,
    pub re_minus: f64,
    pub photon: f64,
    pub isco_prograde: f64,
    pub isco_retrograde: f64,
}

impl Default for LabelOffsets {
    fn default() -> Self {
        Self {
            base: 0.1,
            scale: 0.6,
            rs_plus: 1.6,
            rs_minus: 1.4,
            re_plus: 1.2,
            re_minus: 1.8,
            photon: 1.5,
            isco_prograde: 0.8,
            isco_retrograde: 0.7,
        }
    }
}

impl LabelOffsets {
    // Boost factor for one surface
    pub fn boost(&self, kind: SurfaceKind) -> f64 {
        match kind {
            SurfaceKind::OuterHorizon => self.rs_plus,
            SurfaceKind::InnerHorizon => self.rs_minus,
            SurfaceKind::OuterErgosphere => self.re_plus,
            SurfaceKind::InnerErgosphere => self.re_minus,
            SurfaceKind::PhotonSphere => self.photon,
            SurfaceKind::IscoPrograde => self.isco_prograde,
            SurfaceKind::IscoRetrograde => self.isco_retrograde,
        }
    }

    // Leader-line height for a surface of equatorial radius r
    //
    // boost × (base + scale × (1 - r / max_r)): surfaces near the maximum
    // radius get the smallest closeness term, inner surfaces the largest.
    pub fn height(&self, kind: SurfaceKind, r: f64, max_r: f64) -> f64 {
        self.boost(kind) * (self.base + self.scale * (1.0 - r / max_r))
    }
}

// A text annotation anchored in 3D, with its leader line
#[derive(Debug, Clone, Serialize)]
pub struct LabelAnchor {
    pub text: String,
    // Where the text sits
    pub position: [f64; 3],
    // Line drawn from the geometry up (or out) to the text
    pub leader: [[f64; 3]; 2],
}

// Label anchor for one surface's equator curve
//
// The anchor sits on the -y side of the curve, lifted off the plane by the
// configured heuristic so neighbouring labels do not overlap.
pub fn equator_label(
    kind: SurfaceKind,
    hole: &BlackHole,
    max_r: f64,
    offsets: &LabelOffsets,
) -> LabelAnchor {
    let r = kind.equatorial_radius(hole);
    let rho = equatorial_radius(r, hole.a());
    let z = offsets.height(kind, r, max_r);

    LabelAnchor {
        text: kind.key().to_string(),
        position: [0.0, -rho, z],
        leader: [[0.0, -rho, 0.0], [0.0, -rho, z]],
    }
}

// ============================================================================
// SCHWARZSCHILD SPECIAL-CASING
// ============================================================================

// Curves that vanish in the non-rotating limit
//
// At a = 0 the inner horizon collapses to the origin and both ergosphere
// branches become degenerate with the horizon pair, so drawing them would
// just restate other curves.
pub fn curve_suppressed_at_zero_spin(kind: SurfaceKind) -> bool {
    matches!(
        kind,
        SurfaceKind::InnerHorizon | SurfaceKind::OuterErgosphere | SurfaceKind::InnerErgosphere
    )
}

// Labels hidden in the non-rotating limit
//
// The surviving curves swap their per-surface labels for the fixed
// Schwarzschild reference set below.
pub fn label_suppressed_at_zero_spin(kind: SurfaceKind) -> bool {
    matches!(
        kind,
        SurfaceKind::OuterHorizon
            | SurfaceKind::PhotonSphere
            | SurfaceKind::IscoPrograde
            | SurfaceKind::IscoRetrograde
    )
}

// Fixed reference labels shown only at a = 0
//
// Radii {2, 3, 6} in units of M: the Schwarzschild radius, the photon
// sphere at 1.5 Rs, and the ISCO at 3 Rs, all anchored at the same azimuth
// with radial leader lines from the origin.
pub fn schwarzschild_reference_labels() -> Vec<LabelAnchor> {
    [
        (2.0, "Event horizon (Rs)"),
        (3.0, "Photon sphere (1.5 Rs)"),
        (6.0, "ISCO (3 Rs)"),
    ]
    .iter()
    .map(|&(r, text)| {
        let x = r * REFERENCE_LABEL_ANGLE.cos();
        let y = r * REFERENCE_LABEL_ANGLE.sin();
        LabelAnchor {
            text: text.to_string(),
            position: [x, y, 0.0],
            leader: [[0.0, 0.0, 0.0], [x, y, 0.0]],
        }
    })
    .collect()
}

// ============================================================================
// RING SINGULARITY
// ============================================================================

// The ring singularity as an equatorial circle of radius a
//
// Callers should special-case a = 0, where the ring collapses to a point
// marker at the origin instead of a closed curve.
pub fn singularity_ring(a: f64) -> Vec<[f64; 3]> {
    (0..SINGULARITY_SAMPLES)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / (SINGULARITY_SAMPLES - 1) as f64;
            [a * phi.cos(), a * phi.sin(), 0.0]
        })
        .collect()
}

// Label anchor for the singularity marker
pub fn singularity_label(a: f64) -> LabelAnchor {
    let (x, y, z) = if a == 0.0 {
        (0.0, 0.0, 0.4)
    } else {
        let x = a * SINGULARITY_LABEL_ANGLE.cos();
        let y = a * SINGULARITY_LABEL_ANGLE.sin();
        (x, y, 0.2 + 0.05 * (x * x + y * y).sqrt())
    };

    LabelAnchor {
        text: "Singularity".to_string(),
        position: [x, y, z],
        leader: [[x, y, 0.0], [x, y, z]],
    }
}
