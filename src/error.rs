use crate::{config::ConfigError, profile::ProfileError, render::RenderError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid parameters")]
    InvalidParameters(#[from] ConfigError),
    #[error("Error in the `profile` module")]
    Profile(#[from] ProfileError),
    #[error("Error in the `render` module")]
    Render(#[from] RenderError),
}
