use crate::models::Question;

/// Keeps the questions whose text contains `term`, ignoring case.
///
/// Only the question text is matched, never the answer. Input order is preserved.
pub fn matching(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
