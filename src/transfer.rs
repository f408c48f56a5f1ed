//! CSV import and export of a whole bank.
//!
//! An import either lands completely or leaves the store untouched.

use std::path::Path;

use anyhow::{bail, Context};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, import_categories};
use crate::db::queries::questions::{get_all_questions, import_questions};
use crate::models::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

fn write_to(path: &Path, data: Vec<impl Serialize>) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Malformed record in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

fn ensure_unique_ids(ids: impl Iterator<Item = i64>, file: &str) -> anyhow::Result<()> {
    let repeated: Vec<i64> = ids.duplicates().collect();
    if !repeated.is_empty() {
        bail!("{file} repeats ids {}", repeated.iter().join(", "));
    }
    Ok(())
}

pub async fn export_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !dir.exists() {
        std::fs::create_dir_all(dir)?
    }
    write_to(&dir.join(CATEGORIES_FILE), categories)?;
    write_to(&dir.join(QUESTIONS_FILE), questions)?;
    tracing::info!(dir = %dir.display(), "Bank exported");
    Ok(())
}

pub async fn import_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories: Vec<Category> = read_from(&dir.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_from(&dir.join(QUESTIONS_FILE))?;
    ensure_unique_ids(categories.iter().map(|c| c.id), CATEGORIES_FILE)?;
    ensure_unique_ids(questions.iter().map(|q| q.id), QUESTIONS_FILE)?;

    let (category_count, question_count) = (categories.len(), questions.len());
    let mut tx = pool.begin().await?;
    import_categories(&mut *tx, categories)
        .await
        .context("Cannot import categories")?;
    import_questions(&mut *tx, questions)
        .await
        .context("Cannot import questions")?;
    tx.commit().await.context("Cannot commit import")?;
    tracing::info!(category_count, question_count, "Bank imported");
    Ok(())
}
