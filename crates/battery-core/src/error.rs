use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}
