use std::error::Error;
use std::fmt::Display;
use std::io;

use dragon_data::error::LoadError;
use dragon_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Load(LoadError),
    Vis(VisError),
    Json(serde_json::Error),
    Io(io::Error),
    Path(String),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Load(error) => Some(error),
            CliError::Vis(error) => Some(error),
            CliError::Json(error) => Some(error),
            CliError::Io(error) => Some(error),
            CliError::Path(_) => None,
        }
    }
}

impl From<LoadError> for CliError {
    fn from(error: LoadError) -> Self {
        CliError::Load(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Json(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Load(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Json(error) => write!(f, "{cli_error} JSON error: {error}"),
            CliError::Io(error) => write!(f, "{cli_error} I/O error: {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
