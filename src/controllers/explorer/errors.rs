use std::error::Error;
use std::fmt;

use crate::controllers::explorer::ports::RenderError;

#[derive(Debug)]
pub enum ExplorerError {
    Render(RenderError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err.as_ref()),
        }
    }
}
