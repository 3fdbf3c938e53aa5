//! glint - demo front end for the path tracing kernel.
//!
//! Builds the classic random-sphere scene, renders it, and writes a PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{
    render, render_tiled, Camera, Color, HittableList, ImageBuffer, Material, RenderConfig, Sphere,
    Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "glint", about = "Small stochastic path tracer")]
struct Args {
    /// Output image width in pixels
    #[arg(short = 'w', long, default_value_t = 800)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 450)]
    height: u32,

    /// Samples per pixel
    #[arg(short = 's', long, default_value_t = 100)]
    samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 50)]
    depth: u32,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f64,

    /// Lens aperture (0 disables depth of field)
    #[arg(long, default_value_t = 0.01)]
    aperture: f64,

    /// Render single-threaded with one shared random stream
    #[arg(long)]
    serial: bool,

    /// Output file path
    #[arg(short = 'o', long, default_value = "render.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::info!("generating world (seed {})", args.seed);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let world = random_world(&mut rng)?;

    let look_from = Vec3::new(3.0, 2.0, 3.0);
    let look_at = Vec3::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3::Y,
        args.fov,
        args.width as f64 / args.height as f64,
        args.aperture,
        (look_from - look_at).length(),
    )
    .context("invalid camera parameters")?;

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples,
        max_depth: args.depth,
    };

    log::info!(
        "rendering {}x{} at {} spp ({})",
        args.width,
        args.height,
        args.samples,
        if args.serial { "serial" } else { "tiled" }
    );
    let start = Instant::now();
    let buffer = if args.serial {
        let mut render_rng = StdRng::seed_from_u64(args.seed);
        render(&camera, &world, &config, &mut render_rng)
    } else {
        render_tiled(&camera, &world, &config, args.seed)
    };
    log::info!("rendered in {:.2?}", start.elapsed());

    save_png(&buffer, &args.output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

/// The classic demo scene: a huge ground sphere, a grid of small diffuse
/// spheres, and three feature spheres (metal, glass, metal).
fn random_world(rng: &mut StdRng) -> Result<HittableList> {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, -1.0),
        1000.0,
        Material::lambertian(Color::new(0.5, 0.5, 0.5)),
    )?));

    for a in -11..11 {
        for b in -11..11 {
            let center = Vec3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );
            // Keep the feature spheres' spot clear.
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }
            let albedo = Color::new(
                rng.gen::<f64>() * rng.gen::<f64>(),
                rng.gen::<f64>() * rng.gen::<f64>(),
                rng.gen::<f64>() * rng.gen::<f64>(),
            );
            world.add(Box::new(Sphere::new(
                center,
                0.2,
                Material::lambertian(albedo),
            )?));
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.1),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Material::dielectric(1.5),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.8, 0.8, 0.8), 0.2),
    )?));

    Ok(world)
}

fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let data = buffer.to_rgb8();
    let out = image::RgbImage::from_raw(buffer.width, buffer.height, data)
        .context("pixel buffer does not match image dimensions")?;
    out.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    Ok(())
}
