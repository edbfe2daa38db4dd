use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergedError {
    #[error("git operation failed: {0}")]
    Git(String),

    #[error("failed to run git: {0}")]
    GitNotRunnable(String),

    #[error("invalid branch name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, MergedError>;
