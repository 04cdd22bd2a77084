//! Parallel render scheduler.
//!
//! The framebuffer is split into disjoint runs of whole rows and each run is
//! handed to the worker pool as one unit of work. A unit only ever touches its
//! own slice of cells, so the buffer needs no locking. Every row seeds its own
//! generator from the base seed and the row index, which keeps a seeded render
//! identical no matter how rows are grouped or how many workers run.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use rand::{
    rngs::{OsRng, SmallRng},
    Rng, RngCore, SeedableRng,
};
use rayon::{prelude::*, ThreadPool};

use crate::{
    error::{Error, Result},
    trace::ray_color,
    Camera, Color, FrameBuffer, Hit, RenderConfig,
};

const ROW_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn worker_pool(workers: usize) -> Result<ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("render-{i}"))
        .build()?)
}

pub fn render(
    pool: &ThreadPool,
    camera: &Camera,
    scene: &dyn Hit,
    config: &RenderConfig,
) -> Result<FrameBuffer> {
    config.validate()?;
    let mut frame = FrameBuffer::new(config.image_width, config.image_height);
    render_into(pool, &mut frame, camera, scene, config)?;
    Ok(frame)
}

pub fn render_into(
    pool: &ThreadPool,
    frame: &mut FrameBuffer,
    camera: &Camera,
    scene: &dyn Hit,
    config: &RenderConfig,
) -> Result<()> {
    info!(
        "rendering {}x{} at {} spp, max depth {}",
        config.image_width, config.image_height, config.samples_per_pixel, config.max_depth
    );
    fill(pool, frame, config, |x, y, rng| {
        render_pixel(camera, scene, config, x, y, rng)
    })
}

/// Sum of `samples_per_pixel` jittered samples for pixel `(x, y)`, where `y`
/// counts up from the bottom row.
pub fn render_pixel(
    camera: &Camera,
    scene: &dyn Hit,
    config: &RenderConfig,
    x: usize,
    y: usize,
    rng: &mut dyn RngCore,
) -> Color {
    let u_span = config.image_width.saturating_sub(1).max(1) as f64;
    let v_span = config.image_height.saturating_sub(1).max(1) as f64;
    (0..config.samples_per_pixel).fold(Color::zeros(), |acc, _| {
        let u = (x as f64 + rng.gen::<f64>()) / u_span;
        let v = (y as f64 + rng.gen::<f64>()) / v_span;
        acc + ray_color(camera.get_ray(u, v), scene, config.max_depth, rng)
    })
}

/// Evaluate `shade` once for every cell of `frame` on `pool`. Blocks until
/// every cell has been written.
pub fn fill<F>(
    pool: &ThreadPool,
    frame: &mut FrameBuffer,
    config: &RenderConfig,
    shade: F,
) -> Result<()>
where
    F: Fn(usize, usize, &mut SmallRng) -> Color + Sync,
{
    config.validate()?;
    if frame.width() != config.image_width || frame.height() != config.image_height {
        return Err(Error::InvalidConfig(
            "framebuffer size does not match the configured image",
        ));
    }

    let width = config.image_width;
    let rows = config.rows_per_partition();
    let partitions = config.image_height.div_ceil(rows);
    let base_seed = config.seed.unwrap_or_else(|| OsRng.next_u64());
    let remaining = AtomicUsize::new(partitions);

    info!(
        "{} workers, {} partitions of {} row(s), {:?}",
        pool.current_num_threads(),
        partitions,
        rows,
        config.partition
    );

    pool.install(|| {
        frame
            .pixel_data_mut()
            .par_chunks_mut(width * rows)
            .enumerate()
            .for_each(|(partition, cells)| {
                let first_row = partition * rows;
                for (offset, row) in cells.chunks_mut(width).enumerate() {
                    let y = first_row + offset;
                    let mut rng = row_rng(base_seed, y);
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = shade(x, y, &mut rng);
                    }
                }
                let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                debug!("partition {partition} done, {left} remaining");
            });
    });

    info!("render complete");
    Ok(())
}

fn row_rng(base_seed: u64, row: usize) -> SmallRng {
    SmallRng::seed_from_u64(base_seed ^ (row as u64).wrapping_mul(ROW_SEED_MIX))
}
