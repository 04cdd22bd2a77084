use std::{path::PathBuf, sync::Arc, time::Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use nalgebra::Vector3;

use pathtracer::{
    config::default_workers, Camera, Lambertian, Metal, Partition, RenderConfig, Renderer, Scene,
    Sphere,
};

const ASPECT_RATIO: f64 = 16.0 / 9.0;
const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pathtracer", about = "Render a scene of spheres to a PPM image")]
struct Args {
    /// Output image, must end in .ppm
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    width: usize,

    /// Width over height; the image height is derived from it
    #[arg(long, default_value_t = ASPECT_RATIO)]
    aspect_ratio: f64,

    #[arg(short, long, default_value_t = 100)]
    samples: u32,

    /// Maximum bounces per camera ray
    #[arg(long, default_value_t = 50)]
    max_depth: u32,

    /// Worker threads, defaults to the available parallelism
    #[arg(short, long)]
    workers: Option<usize>,

    #[arg(long, value_enum, default_value_t = Partition::Scanlines)]
    partition: Partition,

    /// Fixed seed for a reproducible render
    #[arg(long)]
    seed: Option<u64>,

    /// Render this many times and report the timings
    #[arg(long, default_value_t = 1)]
    iterations: u32,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let config = RenderConfig::new(args.width, args.aspect_ratio)
        .with_samples(args.samples)
        .with_max_depth(args.max_depth)
        .with_workers(args.workers.unwrap_or_else(default_workers))
        .with_partition(args.partition)
        .with_seed(args.seed);
    let camera = Camera::new(
        Vector3::zeros(),
        args.aspect_ratio,
        VIEWPORT_HEIGHT,
        FOCAL_LENGTH,
    );

    let mut renderer = Renderer::new(&args.output, config, demo_scene(), camera)
        .with_context(|| format!("cannot render to {}", args.output.display()))?;

    let iterations = args.iterations.max(1);
    let mut elapsed = Vec::with_capacity(iterations as usize);
    let mut frame = None;
    for iteration in 1..=iterations {
        let start = Instant::now();
        frame = Some(renderer.render()?);
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        info!("iteration {iteration}/{iterations}: {ms:.1}ms");
        elapsed.push(ms);
    }
    if iterations > 1 {
        let mean = elapsed.iter().sum::<f64>() / elapsed.len() as f64;
        info!("mean over {iterations} iterations: {mean:.1}ms");
    }

    if let Some(frame) = frame {
        renderer
            .write_image(&frame)
            .with_context(|| format!("failed writing {}", args.output.display()))?;
    }
    Ok(())
}

fn demo_scene() -> Scene {
    let ground = Arc::new(Lambertian::new(Vector3::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Vector3::new(0.7, 0.3, 0.3)));
    let left = Arc::new(Metal::new(Vector3::new(0.8, 0.8, 0.8)));
    let right = Arc::new(Metal::new(Vector3::new(0.8, 0.6, 0.2)));

    Scene::new()
        .with(Sphere::new(Vector3::new(0.0, -100.5, -1.0), 100.0, ground))
        .with(Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5, center))
        .with(Sphere::new(Vector3::new(-1.0, 0.0, -1.0), 0.5, left))
        .with(Sphere::new(Vector3::new(1.0, 0.0, -1.0), 0.5, right))
}
