use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open input '{path}': {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected end of input: no header row")]
    EmptyInput,

    #[error("Password alphabet is empty")]
    EmptyAlphabet,

    #[error("Password alphabet contains non-ASCII byte 0x{byte:02X}")]
    NonAsciiAlphabet { byte: u8 },
}
