use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GenError {
    IOError(io::Error),
    InvalidProfile(String),
    KeySpaceExhausted { needed: u64, available: u64 },
}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> GenError {
        GenError::IOError(err)
    }
}

impl error::Error for GenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            GenError::IOError(ref err) => Some(err),
            GenError::InvalidProfile(_) => None,
            GenError::KeySpaceExhausted { .. } => None,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenError::IOError(ref err) => err.fmt(f),
            GenError::InvalidProfile(ref msg) => write!(f, "invalid profile: {}", msg),
            GenError::KeySpaceExhausted { needed, available } => write!(
                f,
                "need {} unique tokens but the key space only holds {}",
                needed, available
            ),
        }
    }
}
