// kernels/kerr_surfaces/src/lib.rs

// Kerr Black Hole Characteristic Surface Geometry
//
// This library computes the closed-form radii of a rotating black hole's
// characteristic surfaces (event horizons, ergospheres, photon sphere,
// ISCOs, ring singularity) and builds displayable 3D geometry for them:
// surface-of-revolution meshes, equatorial guide curves, and label anchors.
// All computations use f64 in geometric units with M = 1 by convention.
//
// There is deliberately no geodesic integration and no physically accurate
// shading here. Everything is a pure function of the current parameter
// snapshot and gets recomputed in full whenever the spin changes.

pub mod color;
pub mod coordinates;
pub mod equator;
pub mod export;
pub mod scene;
pub mod surface;
pub mod types;

pub use color::Rgb;
pub use equator::{LabelAnchor, LabelOffsets};
pub use export::{export_png, rasterize, EXPORT_HEIGHT, EXPORT_WIDTH};
pub use scene::{build_scene, Scene, SceneConfig, SceneManifest, SingularityTrace, SurfaceStyle};
pub use surface::{ErgoBranch, RadiusProfile, SurfaceGrid};
pub use types::{BlackHole, OrbitDirection, SurfaceKind};
