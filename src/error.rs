use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemodeckError {
    #[error("Palette error: {0}")]
    Palette(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<DemodeckError> for String {
    fn from(err: DemodeckError) -> Self {
        err.to_string()
    }
}
