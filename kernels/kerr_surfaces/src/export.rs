// PNG export: project the scene with a fixed camera and stroke it

use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::equator::max_equatorial_radius;
use crate::scene::{Scene, SingularityTrace};

// Fixed export resolution
pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 800;

// Vertical field of view in degrees; wide enough to frame the retrograde
// ISCO at the default camera distance
const FOV_DEG: f64 = 55.0;

// Stroke every n-th grid line when drawing shells as wireframe
const WIREFRAME_STEP: usize = 9;

// ============================================================================
// CAMERA
// ============================================================================

// Fixed perspective camera looking at the origin, Z up
//
// The eye direction (-1.5, -1.5, 0.8) gives a three-quarter view with a
// slight overhead tilt; the distance scales with the largest displayed
// radius so any spin frames comparably.
struct Camera {
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    forward: [f64; 3],
    focal: f64,
    center_x: f64,
    center_y: f64,
}

fn dot(u: [f64; 3], v: [f64; 3]) -> f64 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

fn cross(u: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

impl Camera {
    fn framing(scene: &Scene, width: u32, height: u32) -> Self {
        // Degenerate or NaN scenes still get a valid camera; their
        // unprojectable points are simply skipped while stroking.
        let mut extent = max_equatorial_radius(&scene.hole);
        if !extent.is_finite() || extent <= 0.0 {
            extent = 3.0;
        }

        let eye = [-1.5 * extent, -1.5 * extent, 0.8 * extent];
        let forward = normalize([-eye[0], -eye[1], -eye[2]]);
        let right = normalize(cross(forward, [0.0, 0.0, 1.0]));
        let up = cross(right, forward);

        let half_fov = FOV_DEG.to_radians() * 0.5;
        Self {
            eye,
            right,
            up,
            forward,
            focal: (height as f64 * 0.5) / half_fov.tan(),
            center_x: width as f64 * 0.5,
            center_y: height as f64 * 0.5,
        }
    }

    // Project a world point to pixel coordinates
    //
    // None for points at or behind the eye plane and for NaN input.
    fn project(&self, p: [f64; 3]) -> Option<(f32, f32)> {
        let d = [p[0] - self.eye[0], p[1] - self.eye[1], p[2] - self.eye[2]];
        let depth = dot(d, self.forward);
        if !(depth > 1e-9) {
            return None;
        }

        let sx = self.center_x + self.focal * dot(d, self.right) / depth;
        let sy = self.center_y - self.focal * dot(d, self.up) / depth;
        if sx.is_finite() && sy.is_finite() {
            Some((sx as f32, sy as f32))
        } else {
            None
        }
    }
}

// ============================================================================
// STROKING
// ============================================================================

fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

fn line_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

// Stroke a polyline, restarting the subpath wherever a point fails to
// project (NaN geometry, points behind the camera)
fn stroke_polyline<'a>(
    pixmap: &mut Pixmap,
    camera: &Camera,
    points: impl Iterator<Item = &'a [f64; 3]>,
    rgba: [u8; 4],
    width: f32,
) {
    let mut pb = PathBuilder::new();
    let mut pen_down = false;
    for &p in points {
        match camera.project(p) {
            Some((x, y)) if pen_down => pb.line_to(x, y),
            Some((x, y)) => {
                pb.move_to(x, y);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }

    if let Some(path) = pb.finish() {
        let paint = solid_paint(rgba);
        pixmap.stroke_path(&path, &paint, &line_stroke(width), Transform::identity(), None);
    }
}

fn fill_dot(pixmap: &mut Pixmap, camera: &Camera, p: [f64; 3], rgba: [u8; 4], radius: f32) {
    if let Some((x, y)) = camera.project(p) {
        let mut pb = PathBuilder::new();
        pb.push_circle(x, y, radius);
        if let Some(path) = pb.finish() {
            let paint = solid_paint(rgba);
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

// ============================================================================
// RASTERIZATION
// ============================================================================

// Rasterize a scene at the given resolution
//
// Shells come out as wireframes (a coarse subset of the grid lines),
// curves and leader lines as stroked polylines, the singularity as a ring
// or a filled dot. White background, no text glyphs: the scene model
// carries label strings, but glyph shaping is left to richer front ends.
pub fn rasterize(scene: &Scene, width: u32, height: u32) -> RgbaImage {
    let mut pixmap = Pixmap::new(width, height).expect("export dimensions must be non-zero");
    pixmap.fill(Color::WHITE);

    let camera = Camera::framing(scene, width, height);

    // Shells first so curves and annotations read on top of them
    for surface in &scene.surfaces {
        let rgba = surface.color.to_rgba_u8(surface.opacity);
        let grid = &surface.grid;

        for (i, row) in grid.rows().enumerate() {
            if i % WIREFRAME_STEP == 0 || i == grid.n_phi - 1 {
                stroke_polyline(&mut pixmap, &camera, row.iter(), rgba, 1.0);
            }
        }
        for j in (0..grid.n_theta).step_by(WIREFRAME_STEP) {
            let column: Vec<[f64; 3]> = (0..grid.n_phi).map(|i| grid.point(i, j)).collect();
            stroke_polyline(&mut pixmap, &camera, column.iter(), rgba, 1.0);
        }
    }

    for curve in &scene.curves {
        let rgba = curve.color.to_rgba_u8(1.0);
        stroke_polyline(&mut pixmap, &camera, curve.points.iter(), rgba, 2.5);
    }

    let sing_rgba = scene.singularity_color.to_rgba_u8(1.0);
    match &scene.singularity {
        SingularityTrace::Ring { points } => {
            stroke_polyline(&mut pixmap, &camera, points.iter(), sing_rgba, 3.0);
        }
        SingularityTrace::Point { position } => {
            fill_dot(&mut pixmap, &camera, *position, sing_rgba, 4.0);
        }
    }

    let black = [0, 0, 0, 255];
    for label in &scene.labels {
        stroke_polyline(&mut pixmap, &camera, label.leader.iter(), black, 1.5);
        fill_dot(&mut pixmap, &camera, label.position, black, 2.5);
    }

    RgbaImage::from_raw(width, height, pixmap.take())
        .expect("pixmap buffer matches image dimensions")
}

// ============================================================================
// EXPORT
// ============================================================================

// Rasterize the scene and write BH_sim_<YYMMDDHHmm>.png into dir
//
// The timestamp is local time at minute resolution. Failure to encode or
// write (for example an unwritable directory) comes back as an Err for
// the caller to report; nothing here is fatal.
pub fn export_png(scene: &Scene, dir: &Path) -> io::Result<PathBuf> {
    let filename = format!("BH_sim_{}.png", chrono::Local::now().format("%y%m%d%H%M"));
    let path = dir.join(filename);

    let image = rasterize(scene, EXPORT_WIDTH, EXPORT_HEIGHT);
    image
        .save(&path)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("exported scene to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{build_scene, SceneConfig};

    #[test]
    fn test_rasterize_dimensions() {
        let scene = build_scene(&SceneConfig::default());
        let image = rasterize(&scene, EXPORT_WIDTH, EXPORT_HEIGHT);
        assert_eq!(image.width(), 1200);
        assert_eq!(image.height(), 800);
    }

    #[test]
    fn test_rasterize_draws_something() {
        let scene = build_scene(&SceneConfig::default());
        let image = rasterize(&scene, 400, 300);
        let touched = image.pixels().any(|p| p.0 != [255, 255, 255, 255]);
        assert!(touched, "default scene should leave visible strokes");
    }

    #[test]
    fn test_rasterize_survives_invalid_spin() {
        // All-NaN geometry must fall through to a blank image, not a panic
        let config = SceneConfig { spin: 1.5, show_surfaces: true, ..SceneConfig::default() };
        let image = rasterize(&build_scene(&config), 200, 150);
        assert_eq!(image.width(), 200);
    }

    #[test]
    fn test_export_filename_and_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let scene = build_scene(&SceneConfig::default());

        let path = export_png(&scene, dir.path()).expect("export should succeed");
        let name = path.file_name().and_then(|n| n.to_str()).expect("filename");

        assert!(name.starts_with("BH_sim_"), "unexpected prefix: {}", name);
        assert!(name.ends_with(".png"), "unexpected suffix: {}", name);
        let stamp = &name["BH_sim_".len()..name.len() - ".png".len()];
        assert_eq!(stamp.len(), 10, "timestamp should be YYMMDDHHmm");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()), "non-digit timestamp: {}", stamp);

        let reopened = image::open(&path).expect("exported file should decode");
        assert_eq!(reopened.width(), 1200);
        assert_eq!(reopened.height(), 800);
    }

    #[test]
    fn test_export_reports_unwritable_path() {
        let scene = build_scene(&SceneConfig::default());
        let missing = Path::new("/definitely/not/a/real/directory");
        assert!(export_png(&scene, missing).is_err(), "missing directory should surface as Err");
    }
}
