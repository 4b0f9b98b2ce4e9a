use std::fmt;
use std::string::FromUtf8Error;

#[derive(Debug)]
pub enum HelperError {
    InvalidBase64(String),
    InvalidHex(String),
    InvalidUtf8(FromUtf8Error),
    TimestampOutOfRange(i64),
    NonexistentLocalTime(String),
    InvalidTimeZone(String),
    EmptyCollections,
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64(err) => write!(f, "Invalid base64 input: {}", err),
            Self::InvalidHex(err) => write!(f, "Invalid hexadecimal string: {}", err),
            Self::InvalidUtf8(err) => write!(f, "Decoded bytes are not valid UTF-8: {}", err),
            Self::TimestampOutOfRange(ts) => write!(f, "Unix timestamp out of range: {}", ts),
            Self::NonexistentLocalTime(dt) => write!(f, "Local time does not exist: {}", dt),
            Self::InvalidTimeZone(id) => write!(f, "Unrecognised time zone: {}", id),
            Self::EmptyCollections => {
                write!(f, "At least one of the collections must contain an element")
            }
        }
    }
}

impl std::error::Error for HelperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FromUtf8Error> for HelperError {
    fn from(err: FromUtf8Error) -> Self {
        Self::InvalidUtf8(err)
    }
}

#[cfg(feature = "ende")]
impl From<base64::DecodeError> for HelperError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidBase64(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
