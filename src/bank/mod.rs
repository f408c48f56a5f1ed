pub mod error;
pub mod memory;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod service;
pub mod store;

pub use error::{BankError, ErrorKind, StoreError};
pub use quiz::{QuizOutcome, QuizScope};
pub use service::{Bank, CategoryQuestions, QuestionPage, SearchResults};
pub use store::Store;
