// Kerr Surface Renderer CLI
//
// One-shot front end for the geometry core: assemble a scene from flags
// (or a JSON configuration file), write a manifest, and export the PNG.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use kerr_surfaces::*;

/// CLI arguments for the surface renderer
#[derive(Parser, Debug)]
#[command(name = "render")]
#[command(about = "Render Kerr black hole characteristic surfaces to PNG", long_about = None)]
struct Args {
    /// Spin parameter a in [0, 1] (a = 0 renders the Schwarzschild limit)
    #[arg(short, long, default_value_t = 0.8)]
    spin: f64,

    /// JSON scene configuration file; flags below are ignored when given
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the image and manifest
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Draw filled surface shells, not just the equatorial curves
    #[arg(long, default_value_t = false)]
    surfaces: bool,

    /// Render closed shells instead of open half bodies
    #[arg(long, default_value_t = false)]
    closed_shell: bool,

    /// Include the prograde and retrograde ISCO surfaces
    #[arg(long, default_value_t = false)]
    isco: bool,

    /// Hide the equatorial guide lines
    #[arg(long, default_value_t = false)]
    no_equator_lines: bool,

    /// Hide all text label anchors
    #[arg(long, default_value_t = false)]
    no_labels: bool,

    /// Also write each generated surface grid as JSON (implies --surfaces)
    #[arg(long, default_value_t = false)]
    dump_meshes: bool,
}

/// Build the scene configuration from a JSON file or from the flags
fn load_config(args: &Args) -> Result<SceneConfig, String> {
    if let Some(path) = &args.config {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
        return serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e));
    }

    let mut config = SceneConfig {
        spin: args.spin,
        show_surfaces: args.surfaces || args.dump_meshes,
        half_shell: !args.closed_shell,
        show_equator_lines: !args.no_equator_lines,
        show_labels: !args.no_labels,
        ..SceneConfig::default()
    };
    config.isco_prograde.visible = args.isco;
    config.isco_retrograde.visible = args.isco;
    Ok(config)
}

/// Print the radii table for the configured spin
fn print_radii(hole: &BlackHole) {
    let (r_plus, r_minus) = hole.horizons();
    println!("  r+ (outer horizon):    {:.4} M", r_plus);
    println!("  r- (inner horizon):    {:.4} M", r_minus);
    println!("  photon sphere (pro):   {:.4} M", hole.photon_sphere_radius(OrbitDirection::Prograde));
    println!("  photon sphere (retro): {:.4} M", hole.photon_sphere_radius(OrbitDirection::Retrograde));
    println!("  ISCO (prograde):       {:.4} M", hole.isco_radius(OrbitDirection::Prograde));
    println!("  ISCO (retrograde):     {:.4} M", hole.isco_radius(OrbitDirection::Retrograde));
    println!("  ring singularity:      {:.4} M", hole.ring_singularity_radius());
}

/// Write every surface grid in the scene as <key>.json
fn dump_meshes(scene: &Scene, output: &PathBuf) -> std::io::Result<()> {
    let pb = ProgressBar::new(scene.surfaces.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} meshes")
    {
        pb.set_style(style);
    }

    for surface in &scene.surfaces {
        // "rs+" and friends are not filesystem-friendly
        let stem = surface
            .kind
            .key()
            .replace('+', "_plus")
            .replace('-', "_minus");
        let path = output.join(format!("{}.json", stem));
        let json = serde_json::to_string(&surface.grid)?;
        fs::write(&path, json)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("  ✓ Wrote {} mesh grids to {}", scene.surfaces.len(), output.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let hole = config.black_hole();

    println!("\nKerr Characteristic Surface Renderer");
    println!("=======================================");
    println!("  Spin: a = {}", config.spin);
    println!("  Shells: {} ({})",
        if config.show_surfaces { "on" } else { "off" },
        if config.half_shell { "open half body" } else { "closed" },
    );
    if hole.is_schwarzschild() {
        println!("  Non-rotating limit: degenerate surfaces suppressed");
    }
    println!("=======================================\n");

    print_radii(&hole);
    println!();

    let scene = build_scene(&config);
    fs::create_dir_all(&args.output)?;

    if args.dump_meshes {
        dump_meshes(&scene, &args.output)?;
    }

    let manifest_path = args.output.join("manifest.json");
    let manifest_json = serde_json::to_string_pretty(&SceneManifest::new(&scene))?;
    fs::write(&manifest_path, manifest_json)?;
    println!("  ✓ Wrote manifest: {}", manifest_path.display());

    let image_path = export_png(&scene, &args.output)?;
    println!("  ✓ Wrote image ({}x{}): {}", EXPORT_WIDTH, EXPORT_HEIGHT, image_path.display());

    Ok(())
}
