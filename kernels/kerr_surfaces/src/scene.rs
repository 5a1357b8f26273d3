// Scene assembly from an immutable parameter snapshot

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::equator::{
    curve_suppressed_at_zero_spin, equator_curve, equator_label, label_suppressed_at_zero_spin,
    max_equatorial_radius, schwarzschild_reference_labels, singularity_label, singularity_ring,
    LabelAnchor, LabelOffsets,
};
use crate::surface::{ErgoBranch, RadiusProfile, SurfaceGrid};
use crate::types::{BlackHole, OrbitDirection, SurfaceKind};

// ============================================================================
// CONFIGURATION SNAPSHOT
// ============================================================================

// Display style of one characteristic surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub visible: bool,
    // Shell opacity, clamped to [0.1, 1.0] at build time (slider bounds)
    pub opacity: f64,
    pub color: Rgb,
}

impl SurfaceStyle {
    fn new(visible: bool, color: Rgb) -> Self {
        Self { visible, opacity: 1.0, color }
    }
}

// Everything the renderer needs, captured as one immutable value
//
// The front end collects its controls into a SceneConfig and every
// parameter change rebuilds the whole scene from the new snapshot.
// Nothing is mutated in place and no global state exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // Spin parameter a, meaningful in [0, 1] with mass fixed to 1
    pub spin: f64,
    pub mass: f64,

    // Draw filled shells in addition to the equatorial curves
    pub show_surfaces: bool,
    // Cut the shells open at φ = π to expose the interior
    pub half_shell: bool,

    pub outer_horizon: SurfaceStyle,
    pub inner_horizon: SurfaceStyle,
    pub outer_ergosphere: SurfaceStyle,
    pub inner_ergosphere: SurfaceStyle,
    pub photon_sphere: SurfaceStyle,
    pub isco_prograde: SurfaceStyle,
    pub isco_retrograde: SurfaceStyle,

    pub show_equator_lines: bool,
    pub show_labels: bool,
    pub show_singularity_label: bool,
    pub singularity_color: Rgb,

    pub label_offsets: LabelOffsets,
}

impl Default for SceneConfig {
    // Control-panel defaults: all surfaces except the ISCOs visible,
    // curves and labels on, shells off, half-body view.
    fn default() -> Self {
        Self {
            spin: 0.8,
            mass: 1.0,
            show_surfaces: false,
            half_shell: true,
            outer_horizon: SurfaceStyle::new(true, Rgb::new(0xd3, 0xd3, 0xd3)),
            inner_horizon: SurfaceStyle::new(true, Rgb::new(0xdd, 0xa0, 0xdd)),
            outer_ergosphere: SurfaceStyle::new(true, Rgb::new(0xad, 0xd8, 0xe6)),
            inner_ergosphere: SurfaceStyle::new(true, Rgb::new(0x87, 0xce, 0xfa)),
            photon_sphere: SurfaceStyle::new(true, Rgb::new(0xff, 0xe4, 0xb5)),
            isco_prograde: SurfaceStyle::new(false, Rgb::new(0x90, 0xee, 0x90)),
            isco_retrograde: SurfaceStyle::new(false, Rgb::new(0xc0, 0xf0, 0xc0)),
            show_equator_lines: true,
            show_labels: true,
            show_singularity_label: true,
            singularity_color: Rgb::new(0xf0, 0x80, 0x80),
            label_offsets: LabelOffsets::default(),
        }
    }
}

impl SceneConfig {
    pub fn style(&self, kind: SurfaceKind) -> &SurfaceStyle {
        match kind {
            SurfaceKind::OuterHorizon => &self.outer_horizon,
            SurfaceKind::InnerHorizon => &self.inner_horizon,
            SurfaceKind::OuterErgosphere => &self.outer_ergosphere,
            SurfaceKind::InnerErgosphere => &self.inner_ergosphere,
            SurfaceKind::PhotonSphere => &self.photon_sphere,
            SurfaceKind::IscoPrograde => &self.isco_prograde,
            SurfaceKind::IscoRetrograde => &self.isco_retrograde,
        }
    }

    pub fn black_hole(&self) -> BlackHole {
        BlackHole::new(self.mass, self.spin)
    }
}

// ============================================================================
// SCENE MODEL
// ============================================================================

// One filled shell ready for display
#[derive(Debug, Clone)]
pub struct SurfaceTrace {
    pub kind: SurfaceKind,
    pub grid: SurfaceGrid,
    pub color: Rgb,
    pub opacity: f64,
}

// One equatorial guide curve
#[derive(Debug, Clone)]
pub struct CurveTrace {
    pub kind: SurfaceKind,
    pub points: Vec<[f64; 3]>,
    pub color: Rgb,
}

// The singularity marker: a point at the origin or a ring of radius a
#[derive(Debug, Clone)]
pub enum SingularityTrace {
    Point { position: [f64; 3] },
    Ring { points: Vec<[f64; 3]> },
}

// A fully assembled scene, ready for a rendering layer
//
// The Z axis is the rotation axis, the frame is right-handed, and all
// coordinates are in units of M.
#[derive(Debug, Clone)]
pub struct Scene {
    pub hole: BlackHole,
    pub surfaces: Vec<SurfaceTrace>,
    pub curves: Vec<CurveTrace>,
    pub labels: Vec<LabelAnchor>,
    pub singularity: SingularityTrace,
    pub singularity_color: Rgb,
}

// Build the complete scene from a configuration snapshot
//
// Pure function: called again from scratch on every parameter change, the
// previous scene is simply dropped. In the non-rotating limit the
// degenerate surfaces are suppressed and the per-surface labels give way
// to the fixed Schwarzschild reference set.
pub fn build_scene(config: &SceneConfig) -> Scene {
    let hole = config.black_hole();
    let a = hole.a();
    let schwarzschild = hole.is_schwarzschild();
    let max_r = max_equatorial_radius(&hole);

    log::debug!(
        "building scene: a={} r+={:.4} r-={:.4} r_ph={:.4} isco+={:.4} isco-={:.4}",
        a,
        hole.horizons().0,
        hole.horizons().1,
        hole.photon_sphere_radius(OrbitDirection::Prograde),
        hole.isco_radius(OrbitDirection::Prograde),
        hole.isco_radius(OrbitDirection::Retrograde),
    );

    // Filled shells
    let mut surfaces = Vec::new();
    if config.show_surfaces {
        for kind in SurfaceKind::ALL {
            let style = config.style(kind);
            if !style.visible || (schwarzschild && curve_suppressed_at_zero_spin(kind)) {
                continue;
            }

            let profile = match kind {
                SurfaceKind::OuterErgosphere => {
                    RadiusProfile::Ergosphere { hole, branch: ErgoBranch::Outer }
                }
                SurfaceKind::InnerErgosphere => {
                    RadiusProfile::Ergosphere { hole, branch: ErgoBranch::Inner }
                }
                _ => RadiusProfile::Constant(kind.equatorial_radius(&hole)),
            };

            surfaces.push(SurfaceTrace {
                kind,
                grid: SurfaceGrid::revolve(profile, a, config.half_shell),
                color: style.color,
                opacity: style.opacity.clamp(0.1, 1.0),
            });
        }
    }

    // Singularity marker
    let singularity = if schwarzschild {
        SingularityTrace::Point { position: [0.0, 0.0, 0.0] }
    } else {
        SingularityTrace::Ring { points: singularity_ring(a) }
    };

    // Annotations
    let mut labels = Vec::new();
    if config.show_labels {
        if config.show_singularity_label {
            labels.push(singularity_label(a));
        }
        if schwarzschild {
            labels.extend(schwarzschild_reference_labels());
        }
        for kind in SurfaceKind::ALL {
            if !config.style(kind).visible {
                continue;
            }
            if schwarzschild
                && (curve_suppressed_at_zero_spin(kind) || label_suppressed_at_zero_spin(kind))
            {
                continue;
            }
            labels.push(equator_label(kind, &hole, max_r, &config.label_offsets));
        }
    }

    // Equatorial guide curves
    let mut curves = Vec::new();
    if config.show_equator_lines {
        for kind in SurfaceKind::ALL {
            let style = config.style(kind);
            if !style.visible || (schwarzschild && curve_suppressed_at_zero_spin(kind)) {
                continue;
            }
            curves.push(CurveTrace {
                kind,
                points: equator_curve(kind.equatorial_radius(&hole), a),
                color: style.color,
            });
        }
    }

    Scene {
        hole,
        surfaces,
        curves,
        labels,
        singularity,
        singularity_color: config.singularity_color,
    }
}

// ============================================================================
// MANIFEST METADATA
// ============================================================================

// Summary of a built scene, serialized to JSON next to the exported image
#[derive(Debug, Clone, Serialize)]
pub struct SceneManifest {
    pub mass: f64,
    pub spin: f64,
    pub r_plus: f64,
    pub r_minus: f64,
    pub ergosphere_equator: f64,
    pub photon_prograde: f64,
    pub photon_retrograde: f64,
    pub isco_prograde: f64,
    pub isco_retrograde: f64,
    pub surface_count: usize,
    pub curve_count: usize,
    pub label_count: usize,
}

impl SceneManifest {
    pub fn new(scene: &Scene) -> Self {
        let hole = &scene.hole;
        let (r_plus, r_minus) = hole.horizons();
        Self {
            mass: hole.mass,
            spin: hole.spin,
            r_plus,
            r_minus,
            ergosphere_equator: hole.ergosphere_radii(std::f64::consts::FRAC_PI_2).0,
            photon_prograde: hole.photon_sphere_radius(OrbitDirection::Prograde),
            photon_retrograde: hole.photon_sphere_radius(OrbitDirection::Retrograde),
            isco_prograde: hole.isco_radius(OrbitDirection::Prograde),
            isco_retrograde: hole.isco_radius(OrbitDirection::Retrograde),
            surface_count: scene.surfaces.len(),
            curve_count: scene.curves.len(),
            label_count: scene.labels.len(),
        }
    }
}
