//! Query interface the bank needs from persistence.
//!
//! Implementations own record lifetime and their own concurrency control.
//! Sequences of records are returned in ascending id order.

use std::future::Future;

use super::error::StoreResult;
use crate::models::{Category, NewQuestion, Question};

pub trait Store {
    fn get_all_categories(&self) -> impl Future<Output = StoreResult<Vec<Category>>> + Send;

    fn get_category_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = StoreResult<Option<Category>>> + Send;

    fn get_all_questions(&self) -> impl Future<Output = StoreResult<Vec<Question>>> + Send;

    fn get_questions_by_category(
        &self,
        category: i64,
    ) -> impl Future<Output = StoreResult<Vec<Question>>> + Send;

    fn insert_question(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = StoreResult<Question>> + Send;

    /// Fails with [`StoreError::RowNotFound`](super::StoreError::RowNotFound) when nothing was deleted.
    fn delete_question(&self, id: i64) -> impl Future<Output = StoreResult<()>> + Send;
}
