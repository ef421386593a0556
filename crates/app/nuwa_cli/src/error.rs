use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Client: {}", .0)]
    Client(#[from] nuwa_api_client::ClientError),

    #[error("Corrections: {}", .0)]
    Corrections(#[from] nuwa_core::correction::CorrectionTableError),
}
