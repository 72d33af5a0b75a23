use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    DuplicateFunction(String),
    FunctionNotFound(String),
    Internal(String),
}

impl Error {
    pub fn duplicate_function(name: impl Into<String>) -> Self {
        Error::DuplicateFunction(name.into())
    }

    pub fn function_not_found(name: impl Into<String>) -> Self {
        Error::FunctionNotFound(name.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateFunction(name) => {
                write!(f, "Support handler already registered for: {}", name)
            }
            Error::FunctionNotFound(name) => write!(f, "Function not found: {}", name),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
