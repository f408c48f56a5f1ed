//! Store kept entirely in process memory. Used in tests and for scratch banks.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::{StoreError, StoreResult};
use super::store::Store;
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
struct Records {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_category(&self, kind: &str) -> Category {
        let mut records = self.records();
        records.last_category_id += 1;
        let category = Category {
            id: records.last_category_id,
            kind: kind.to_owned(),
        };
        records.categories.insert(category.id, category.clone());
        category
    }

    pub fn question_count(&self) -> usize {
        self.records().questions.len()
    }
}

impl Store for MemoryStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.records().categories.values().cloned().collect())
    }

    async fn get_category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.records().categories.get(&id).cloned())
    }

    async fn get_all_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.records().questions.values().cloned().collect())
    }

    async fn get_questions_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .records()
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut records = self.records();
        if !records.categories.contains_key(&question.category) {
            return Err(StoreError::Rejected(format!(
                "category {} does not exist",
                question.category
            )));
        }
        records.last_question_id += 1;
        let question = Question {
            id: records.last_question_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        records.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        self.records()
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound(id))
    }
}
