use iconsmith_core::CoreError;
use iconsmith_render::RenderError;
use thiserror::Error;

/// Anything that aborts a command.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
