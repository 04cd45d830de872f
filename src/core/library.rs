use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    InvalidGenre {
        message: String,
        genre: String,
    },
    InvalidQuantity {
        message: String,
        quantity: i64,
    },
    NegativeQuantity {
        message: String,
        quantity: i64,
    },
    NotFound {
        message: String,
    },
    LimitExceeded {
        message: String,
        limit: usize,
    },
    NoCopiesAvailable {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    HasActiveLoans {
        message: String,
    },
    // Requested total copies is below the number of copies currently on loan.
    InsufficientTotal {
        message: String,
        requested: i64,
        borrowed: i64,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn invalid_genre(genre: &str) -> LibraryError {
        LibraryError::InvalidGenre {
            message: format!("Genre '{}' is not valid.", genre),
            genre: genre.to_string(),
        }
    }

    pub fn invalid_quantity(message: &str, quantity: i64) -> LibraryError {
        LibraryError::InvalidQuantity { message: message.to_string(), quantity }
    }

    pub fn negative_quantity(message: &str, quantity: i64) -> LibraryError {
        LibraryError::NegativeQuantity { message: message.to_string(), quantity }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn limit_exceeded(limit: usize) -> LibraryError {
        LibraryError::LimitExceeded {
            message: format!("Borrowing limit reached ({} books).", limit),
            limit,
        }
    }

    pub fn no_copies_available(message: &str) -> LibraryError {
        LibraryError::NoCopiesAvailable { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn has_active_loans(message: &str) -> LibraryError {
        LibraryError::HasActiveLoans { message: message.to_string() }
    }

    pub fn insufficient_total(requested: i64, borrowed: i64) -> LibraryError {
        LibraryError::InsufficientTotal {
            message: format!("New copies count {} is less than the number of borrowed copies ({}).",
                             requested, borrowed),
            requested,
            borrowed,
        }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::DuplicateKey { .. } => { ErrorKind::DuplicateKey }
            LibraryError::InvalidGenre { .. } => { ErrorKind::InvalidGenre }
            LibraryError::InvalidQuantity { .. } => { ErrorKind::InvalidQuantity }
            LibraryError::NegativeQuantity { .. } => { ErrorKind::NegativeQuantity }
            LibraryError::NotFound { .. } => { ErrorKind::NotFound }
            LibraryError::LimitExceeded { .. } => { ErrorKind::LimitExceeded }
            LibraryError::NoCopiesAvailable { .. } => { ErrorKind::NoCopiesAvailable }
            LibraryError::NotBorrowed { .. } => { ErrorKind::NotBorrowed }
            LibraryError::HasActiveLoans { .. } => { ErrorKind::HasActiveLoans }
            LibraryError::InsufficientTotal { .. } => { ErrorKind::InsufficientTotal }
            LibraryError::Serialization { .. } => { ErrorKind::Serialization }
            LibraryError::Runtime { .. } => { ErrorKind::Runtime }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } |
            LibraryError::InvalidGenre { message, .. } |
            LibraryError::InvalidQuantity { message, .. } |
            LibraryError::NegativeQuantity { message, .. } |
            LibraryError::NotFound { message } |
            LibraryError::LimitExceeded { message, .. } |
            LibraryError::NoCopiesAvailable { message } |
            LibraryError::NotBorrowed { message } |
            LibraryError::HasActiveLoans { message } |
            LibraryError::InsufficientTotal { message, .. } |
            LibraryError::Serialization { message } |
            LibraryError::Runtime { message, .. } => { message.as_str() }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io error {:?}", err).as_str(), Some(err.kind().to_string()))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            _ => {
                write!(f, "{}", self.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ErrorKind is the stable name of a failure reported back to callers
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ErrorKind {
    DuplicateKey,
    InvalidGenre,
    InvalidQuantity,
    NegativeQuantity,
    NotFound,
    LimitExceeded,
    NoCopiesAvailable,
    NotBorrowed,
    HasActiveLoans,
    InsufficientTotal,
    Serialization,
    Runtime,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ErrorKind::DuplicateKey => write!(f, "DuplicateKey"),
            ErrorKind::InvalidGenre => write!(f, "InvalidGenre"),
            ErrorKind::InvalidQuantity => write!(f, "InvalidQuantity"),
            ErrorKind::NegativeQuantity => write!(f, "NegativeQuantity"),
            ErrorKind::NotFound => write!(f, "NotFound"),
            ErrorKind::LimitExceeded => write!(f, "LimitExceeded"),
            ErrorKind::NoCopiesAvailable => write!(f, "NoCopiesAvailable"),
            ErrorKind::NotBorrowed => write!(f, "NotBorrowed"),
            ErrorKind::HasActiveLoans => write!(f, "HasActiveLoans"),
            ErrorKind::InsufficientTotal => write!(f, "InsufficientTotal"),
            ErrorKind::Serialization => write!(f, "Serialization"),
            ErrorKind::Runtime => write!(f, "Runtime"),
        }
    }
}

// Genre is the fixed set of shelving categories a book may belong to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Romance,
    Fantasy,
    Biography,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Romance,
        Genre::Fantasy,
        Genre::Biography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SciFi => "Sci-Fi",
            Genre::Romance => "Romance",
            Genre::Fantasy => "Fantasy",
            Genre::Biography => "Biography",
        }
    }
}

// Matching is exact and case-sensitive; anything else is rejected rather than defaulted.
impl TryFrom<&str> for Genre {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Genre::ALL.iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| LibraryError::invalid_genre(s))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
