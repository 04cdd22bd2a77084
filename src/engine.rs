use std::{
    fs::File,
    io::{BufWriter, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use log::{debug, info};
use rayon::ThreadPool;

use crate::{
    error::{Error, Result},
    ppm, render, Camera, FrameBuffer, RenderConfig, Scene,
};

const EXTENSION: &str = "ppm";

/// Fails at construction on a bad path, before any rendering work happens.
pub struct Renderer {
    path: PathBuf,
    out: BufWriter<File>,
    pool: ThreadPool,
    config: RenderConfig,
    scene: Scene,
    camera: Camera,
}

impl Renderer {
    pub fn new(
        path: impl AsRef<Path>,
        config: RenderConfig,
        scene: Scene,
        camera: Camera,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
            return Err(Error::OutputExtension { path });
        }
        config.validate()?;
        let pool = render::worker_pool(config.workers)?;
        let file = File::create(&path)?;
        debug!("opened {}", path.display());
        Ok(Self {
            path,
            out: BufWriter::new(file),
            pool,
            config,
            scene,
            camera,
        })
    }

    pub fn render(&self) -> Result<FrameBuffer> {
        render::render(&self.pool, &self.camera, &self.scene, &self.config)
    }

    pub fn render_into(&self, frame: &mut FrameBuffer) -> Result<()> {
        render::render_into(&self.pool, frame, &self.camera, &self.scene, &self.config)
    }

    /// Replace the output file's contents with `frame`.
    pub fn write_image(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.out.seek(SeekFrom::Start(0))?;
        self.out.get_ref().set_len(0)?;
        ppm::write_ppm(&mut self.out, frame, self.config.samples_per_pixel)?;
        info!(
            "wrote {}x{} image to {}",
            frame.width(),
            frame.height(),
            self.path.display()
        );
        Ok(())
    }
}
