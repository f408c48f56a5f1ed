//! Operations exposed to the boundary layer.
//!
//! [`Bank`] keeps no state of its own: every call reads the live store, so results always
//! reflect what the store holds at call time.

use std::collections::{BTreeMap, HashSet};
use std::num::NonZeroUsize;

use serde::Serialize;

use super::error::{BankError, StoreError};
use super::pagination::{paginate, FIRST_PAGE, QUESTIONS_PER_PAGE};
use super::quiz::{self, QuizOutcome, QuizScope};
use super::search;
use super::store::Store;
use crate::models::{Category, NewQuestion, Question, QuestionDraft};

pub type BankResult<T> = Result<T, BankError>;

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Maps category ids to their display names.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

pub struct Bank<S> {
    store: S,
    page_size: NonZeroUsize,
}

impl<S: Store> Bank<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            page_size: QUESTIONS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> BankResult<Vec<Category>> {
        let categories = self.store.get_all_categories().await?;
        if categories.is_empty() {
            return Err(BankError::NoCategories);
        }
        Ok(categories)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_questions(&self, page: Option<NonZeroUsize>) -> BankResult<QuestionPage> {
        let page = page.unwrap_or(FIRST_PAGE);
        let questions = self.store.get_all_questions().await?;
        let current = paginate(&questions, page, self.page_size);
        if current.is_empty() {
            tracing::debug!(total = questions.len(), "Requested page is empty");
            return Err(BankError::EmptyPage(page.get()));
        }
        let current = current.to_vec();
        let categories = self.store.get_all_categories().await?;

        Ok(QuestionPage {
            questions: current,
            total_questions: questions.len(),
            current_category: None,
            categories: category_map(categories),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_question(&self, id: i64) -> BankResult<i64> {
        match self.store.delete_question(id).await {
            Ok(()) => {
                tracing::info!(id, "Question deleted");
                Ok(id)
            }
            Err(StoreError::RowNotFound(_)) => Err(BankError::UnknownQuestion(id)),
            Err(err) => {
                tracing::warn!(id, "Failed to delete question: {err}");
                Err(err.into())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_question(&self, draft: QuestionDraft) -> BankResult<Question> {
        let new_question = validate(draft)?;
        let created = self.store.insert_question(new_question).await.map_err(|err| {
            tracing::warn!("Failed to insert question: {err}");
            BankError::from(err)
        })?;
        tracing::info!(id = created.id, "Question created");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    pub async fn search_questions(&self, term: Option<&str>) -> BankResult<SearchResults> {
        let term = term.map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(BankError::EmptySearchTerm);
        }
        let questions = search::matching(self.store.get_all_questions().await?, term);

        Ok(SearchResults {
            total_questions: questions.len(),
            questions,
            current_category: None,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn questions_by_category(&self, category_id: i64) -> BankResult<CategoryQuestions> {
        let category = self
            .store
            .get_category_by_id(category_id)
            .await?
            .ok_or(BankError::UnknownCategory(category_id))?;
        let questions = self.store.get_questions_by_category(category.id).await?;

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category.kind,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn next_quiz_question(
        &self,
        category_id: i64,
        asked: &HashSet<i64>,
    ) -> BankResult<QuizOutcome> {
        let scope = QuizScope::from(category_id);
        let pool = match scope {
            QuizScope::All => self.store.get_all_questions().await?,
            QuizScope::Category(id) => self.store.get_questions_by_category(id).await?,
        };
        let outcome = quiz::next_question(pool, scope, asked, &mut rand::thread_rng())?;
        if outcome == QuizOutcome::Exhausted {
            tracing::debug!(asked = asked.len(), "Quiz has no unseen questions left");
        }
        Ok(outcome)
    }
}

fn validate(draft: QuestionDraft) -> BankResult<NewQuestion> {
    fn text(value: Option<String>, field: &'static str) -> BankResult<String> {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or(BankError::MissingField(field))
    }

    Ok(NewQuestion {
        question: text(draft.question, "question")?,
        answer: text(draft.answer, "answer")?,
        category: draft.category.ok_or(BankError::MissingField("category"))?,
        difficulty: draft
            .difficulty
            .ok_or(BankError::MissingField("difficulty"))?,
    })
}
