use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("output {path:?} is not a .ppm file")]
    OutputExtension { path: PathBuf },
    #[error("invalid render configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
