#![allow(dead_code)]

use trivia_bank::bank::memory::MemoryStore;
use trivia_bank::bank::{Bank, Store};
use trivia_bank::db::queries::categories::create_category;
use trivia_bank::db::SqliteStore;
use trivia_bank::models::{NewQuestion, Question};

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category index into CATEGORIES, difficulty)
pub const QUESTIONS: [(&str, &str, usize, i64); 12] = [
    ("What is the heaviest organ in the human body?", "The Liver", 0, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 0, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 0, 4),
    ("La Giaconda is better known as what?", "Mona Lisa", 1, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 1, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 2, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 3, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 3, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 5, 3),
];

pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_owned(),
        answer: answer.to_owned(),
        category,
        difficulty,
    }
}

async fn seed_questions<S: Store>(store: &S, category_ids: &[i64]) {
    for (question, answer, category, difficulty) in QUESTIONS {
        store
            .insert_question(new_question(question, answer, category_ids[category], difficulty))
            .await
            .expect("Failed to seed question");
    }
}

/// A bank with six categories and twelve questions.
pub async fn memory_bank() -> Bank<MemoryStore> {
    let store = MemoryStore::new();
    let ids: Vec<i64> = CATEGORIES.iter().map(|c| store.add_category(c).id).collect();
    seed_questions(&store, &ids).await;
    Bank::new(store)
}

/// A bank with six categories and no questions.
pub fn empty_memory_bank() -> Bank<MemoryStore> {
    let store = MemoryStore::new();
    for category in CATEGORIES {
        store.add_category(category);
    }
    Bank::new(store)
}

pub async fn sqlite_store(dir: &tempfile::TempDir) -> SqliteStore {
    let path = dir.path().join("trivia.db");
    SqliteStore::open(path.to_str().expect("Temp path is not UTF-8"))
        .await
        .expect("Failed to open database")
}

pub async fn seeded_sqlite_store(dir: &tempfile::TempDir) -> SqliteStore {
    let store = sqlite_store(dir).await;
    let mut ids = Vec::new();
    for category in CATEGORIES {
        ids.push(
            create_category(store.pool(), category)
                .await
                .expect("Failed to seed category"),
        );
    }
    seed_questions(&store, &ids).await;
    store
}

pub async fn question_by_id(store: &SqliteStore, id: i64) -> Question {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_one(store.pool())
    .await
    .expect("Failed to fetch question")
}
