use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} does not exist")]
    RowNotFound(i64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome class of a failed bank operation, as seen by the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Unprocessable,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Unprocessable => 422,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Unprocessable => "Unprocessable Entity",
        }
    }
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("no categories available")]
    NoCategories,
    #[error("page {0} is empty")]
    EmptyPage(usize),
    #[error("search term is empty")]
    EmptySearchTerm,
    #[error("category {0} does not exist")]
    UnknownCategory(i64),
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("question {0} does not exist")]
    UnknownQuestion(i64),
    #[error("no questions to play for category {0}")]
    InvalidCategory(i64),
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::NoCategories
            | BankError::EmptyPage(_)
            | BankError::EmptySearchTerm
            | BankError::UnknownCategory(_) => ErrorKind::NotFound,
            BankError::MissingField(_)
            | BankError::UnknownQuestion(_)
            | BankError::InvalidCategory(_)
            | BankError::Store(_) => ErrorKind::Unprocessable,
        }
    }
}
