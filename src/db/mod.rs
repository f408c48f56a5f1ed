pub mod queries;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Error;

use crate::bank::error::{StoreError, StoreResult};
use crate::bank::Store;
use crate::models::{Category, NewQuestion, Question};

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(format!("sqlite:{}", path).as_str())?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePool::connect_with(options).await
}

/// Creates the tables when they are missing. Existing data is left alone.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
)
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL REFERENCES categories (id) ON DELETE CASCADE,
    difficulty INTEGER NOT NULL
)
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// [`Store`] backed by a SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn open(path: &str) -> Result<Self, Error> {
        let pool = establish_connection(path).await?;
        init_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Store for SqliteStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(queries::categories::get_all_categories(&self.pool).await?)
    }

    async fn get_category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(queries::categories::get_category(&self.pool, id).await?)
    }

    async fn get_all_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(queries::questions::get_all_questions(&self.pool).await?)
    }

    async fn get_questions_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(queries::questions::get_questions_for_category(&self.pool, category).await?)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        Ok(queries::questions::create_question(&self.pool, &question).await?)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        match queries::questions::delete_question(&self.pool, id).await? {
            0 => Err(StoreError::RowNotFound(id)),
            _ => Ok(()),
        }
    }
}
