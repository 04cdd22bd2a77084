use std::{mem, num::NonZeroUsize, thread};

use crate::{
    error::{Error, Result},
    Color,
};

const SAMPLES_PER_PIXEL: u32 = 100;
const MAX_DEPTH: u32 = 50;

/// How rows are grouped into units of parallel work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Partition {
    /// One unit per image row.
    #[default]
    Scanlines,
    /// One contiguous run of rows per worker.
    Blocks,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub image_width: usize,
    pub image_height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub workers: usize,
    pub partition: Partition,
    /// Fixed base seed; `None` draws one from the OS on every render.
    pub seed: Option<u64>,
}

impl RenderConfig {
    pub fn new(image_width: usize, aspect_ratio: f64) -> Self {
        let image_height = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            (image_width as f64 / aspect_ratio) as usize
        } else {
            0
        };
        Self {
            image_width,
            image_height,
            samples_per_pixel: SAMPLES_PER_PIXEL,
            max_depth: MAX_DEPTH,
            workers: default_workers(),
            partition: Partition::default(),
            seed: None,
        }
    }

    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn pixel_count(&self) -> usize {
        self.image_width * self.image_height
    }

    pub fn rows_per_partition(&self) -> usize {
        match self.partition {
            Partition::Scanlines => 1,
            Partition::Blocks => self.image_height.div_ceil(self.workers.max(1)).max(1),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 {
            return Err(Error::InvalidConfig("image width must be positive"));
        }
        if self.image_height == 0 {
            return Err(Error::InvalidConfig("image height must be at least 1"));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidConfig("samples per pixel must be positive"));
        }
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig("max depth must be positive"));
        }
        if self.workers == 0 {
            return Err(Error::InvalidConfig("worker count must be positive"));
        }
        let bytes = self
            .image_width
            .checked_mul(self.image_height)
            .and_then(|cells| cells.checked_mul(mem::size_of::<Color>()));
        if !bytes.is_some_and(|bytes| bytes <= isize::MAX as usize) {
            return Err(Error::InvalidConfig("image is too large to allocate"));
        }
        Ok(())
    }
}

pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
