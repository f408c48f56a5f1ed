use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use trivia_bank::bank::service::category_map;
use trivia_bank::bank::{Bank, BankError, QuizOutcome};
use trivia_bank::db::queries::categories::create_category;
use trivia_bank::db::SqliteStore;
use trivia_bank::models::QuestionDraft;
use trivia_bank::settings::Settings;
use trivia_bank::telemetry::init_tracing;
use trivia_bank::transfer::{export_data, import_data};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path, overrides the configured one
    #[clap(long)]
    db: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,
    /// List one page of questions
    Questions {
        #[clap(long, default_value = "1")]
        page: NonZeroUsize,
    },
    /// List the questions of a category
    Category { id: i64 },
    /// Find questions whose text contains a term
    Search { term: Option<String> },
    /// Add a question
    Create {
        #[clap(long)]
        question: Option<String>,
        #[clap(long)]
        answer: Option<String>,
        #[clap(long)]
        category: Option<i64>,
        #[clap(long)]
        difficulty: Option<i64>,
    },
    /// Delete a question
    Delete { id: i64 },
    /// Draw the next quiz question
    Quiz {
        /// Category id, 0 plays every category
        #[clap(long, default_value = "0")]
        category: i64,
        /// Ids of questions already asked
        #[clap(long, value_delimiter = ',')]
        asked: Vec<i64>,
    },
    /// Add a category
    AddCategory { kind: String },
    /// Import data to the bank
    Import { path: PathBuf },
    /// Export data from the bank
    Export { path: PathBuf },
}

fn success(body: impl Serialize) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(body)?;
    if let Value::Object(map) = &mut value {
        map.insert("success".to_owned(), Value::Bool(true));
    }
    Ok(value)
}

fn failure(err: &BankError) -> Value {
    let kind = err.kind();
    json!({
        "success": false,
        "error": kind.status_code(),
        "message": kind.message(),
        "reason": err.to_string(),
    })
}

/// Outer error: the command could not run at all. Inner error: the bank refused the request.
async fn run(
    bank: &Bank<SqliteStore>,
    command: Commands,
) -> anyhow::Result<Result<Value, BankError>> {
    let response = match command {
        Commands::Categories => bank
            .list_categories()
            .await
            .map(|categories| json!({ "categories": category_map(categories) })),
        Commands::Questions { page } => bank.list_questions(Some(page)).await.map(|p| json!(p)),
        Commands::Category { id } => bank.questions_by_category(id).await.map(|c| json!(c)),
        Commands::Search { term } => bank
            .search_questions(term.as_deref())
            .await
            .map(|r| json!(r)),
        Commands::Create {
            question,
            answer,
            category,
            difficulty,
        } => {
            let draft = QuestionDraft {
                question,
                answer,
                category,
                difficulty,
            };
            bank.create_question(draft).await.map(|q| {
                json!({
                    "created": q.id,
                    "question": q,
                    "message": "The question has been successfully created!",
                })
            })
        }
        Commands::Delete { id } => bank
            .delete_question(id)
            .await
            .map(|id| json!({ "deleted": id })),
        Commands::Quiz { category, asked } => {
            let asked: HashSet<i64> = asked.into_iter().collect();
            bank.next_quiz_question(category, &asked)
                .await
                .map(|outcome| match outcome {
                    QuizOutcome::Question(q) => json!({ "question": q }),
                    QuizOutcome::Exhausted => json!({ "question": null }),
                })
        }
        Commands::AddCategory { kind } => {
            let id = create_category(bank.store().pool(), &kind)
                .await
                .context("Cannot create category")?;
            Ok(json!({ "created": id }))
        }
        Commands::Import { path } => {
            import_data(bank.store().pool(), &path).await?;
            Ok(json!({}))
        }
        Commands::Export { path } => {
            export_data(bank.store().pool(), &path).await?;
            Ok(json!({}))
        }
    };
    match response {
        Ok(body) => Ok(Ok(success(body)?)),
        Err(err) => Ok(Err(err)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Cannot load settings")?;
    let db_path = cli.db.unwrap_or_else(|| settings.database.path.clone());
    let store = SqliteStore::open(&db_path)
        .await
        .with_context(|| format!("Cannot open database at {db_path}"))?;
    let bank = Bank::new(store).with_page_size(settings.page_size());

    match run(&bank, cli.command).await? {
        Ok(body) => println!("{body}"),
        Err(err) => {
            tracing::debug!("Request failed: {err}");
            println!("{}", failure(&err));
            std::process::exit(1);
        }
    }
    Ok(())
}
