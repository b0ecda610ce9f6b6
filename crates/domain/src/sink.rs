use crate::Set;

/// Destination for prescribed set rows: a console table, a spreadsheet
/// document, a CSV file.
pub trait SetSink {
    fn write(&mut self, set: &Set) -> Result<(), SinkError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
