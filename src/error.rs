use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types at the collaborator seams
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    FragmentError { file: PathBuf, message: String },
    RegistryError { model: String, message: String },
    RenderError { stage: &'static str, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::FragmentError { file, message } => {
                write!(f, "Fragment error in {}: {}", file.display(), message)
            }
            Error::RegistryError { model, message } => {
                write!(f, "Registry error for model {}: {}", model, message)
            }
            Error::RenderError { stage, message } => {
                write!(f, "Render error at {} stage: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
