use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    GungnirError(#[from] gungnir::server::error::Error),
    #[error(transparent)]
    ComputeError(#[from] gungnir::server::error::compute::ComputeError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
