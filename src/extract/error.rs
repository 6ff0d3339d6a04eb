use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Structural failures of the submitted input. These are not recoverable
/// into a nil proof: no response is produced for them.
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no input file found in {dir}")]
    NoInputFile { dir: PathBuf },

    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("archive does not contain required entry '{entry}'")]
    MissingEntry { entry: &'static str },

    #[error("'{entry}' is not valid JSON: {source}")]
    MalformedJson {
        entry: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type ExtractResult<T> = Result<T, ExtractError>;
