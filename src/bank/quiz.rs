use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::Serialize;

use super::error::BankError;
use crate::models::Question;

/// Which questions a quiz draws from. Category id `0` stands for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl From<i64> for QuizScope {
    fn from(id: i64) -> Self {
        match id {
            0 => QuizScope::All,
            id => QuizScope::Category(id),
        }
    }
}

impl QuizScope {
    pub fn id(self) -> i64 {
        match self {
            QuizScope::All => 0,
            QuizScope::Category(id) => id,
        }
    }

    pub fn includes(self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizOutcome {
    Question(Question),
    /// Every question in scope was already asked.
    Exhausted,
}

/// Picks a question from `pool` that is in `scope` and not in `asked`.
///
/// Every remaining candidate is equally likely to be chosen.
pub fn next_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    scope: QuizScope,
    asked: &HashSet<i64>,
    rng: &mut R,
) -> Result<QuizOutcome, BankError> {
    let mut in_scope = pool.into_iter().filter(|q| scope.includes(q)).peekable();
    if in_scope.peek().is_none() {
        return Err(BankError::InvalidCategory(scope.id()));
    }

    let picked = in_scope.filter(|q| !asked.contains(&q.id)).choose(rng);
    Ok(picked.map_or(QuizOutcome::Exhausted, QuizOutcome::Question))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool() -> Vec<Question> {
        (1..=6)
            .map(|id| Question {
                id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: if id % 2 == 0 { 2 } else { 1 },
                difficulty: 1 + id % 5,
            })
            .collect()
    }

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(QuizScope::from(0), QuizScope::All);
        assert_eq!(QuizScope::from(4), QuizScope::Category(4));
    }

    #[test]
    fn empty_scope_is_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = next_question(pool(), QuizScope::Category(9999), &HashSet::new(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, BankError::InvalidCategory(9999)));

        let err = next_question(vec![], QuizScope::All, &HashSet::new(), &mut rng).unwrap_err();
        assert!(matches!(err, BankError::InvalidCategory(0)));
    }

    #[test]
    fn never_repeats_an_asked_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let asked: HashSet<i64> = [1, 2, 3, 4, 5].into_iter().collect();
        for _ in 0..50 {
            match next_question(pool(), QuizScope::All, &asked, &mut rng).unwrap() {
                QuizOutcome::Question(q) => assert_eq!(q.id, 6),
                QuizOutcome::Exhausted => panic!("one question was still unseen"),
            }
        }
    }

    #[test]
    fn stays_inside_the_category() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            match next_question(pool(), QuizScope::Category(2), &HashSet::new(), &mut rng).unwrap()
            {
                QuizOutcome::Question(q) => assert_eq!(q.category, 2),
                QuizOutcome::Exhausted => panic!("category 2 has questions"),
            }
        }
    }

    #[test]
    fn exhausted_when_everything_in_scope_was_asked() {
        let mut rng = StdRng::seed_from_u64(11);
        let asked: HashSet<i64> = [1, 3, 5].into_iter().collect();
        let outcome = next_question(pool(), QuizScope::Category(1), &asked, &mut rng).unwrap();
        assert_eq!(outcome, QuizOutcome::Exhausted);
    }

    #[test]
    fn every_candidate_gets_picked_evenly() {
        let mut rng = StdRng::seed_from_u64(42);
        let asked: HashSet<i64> = [2].into_iter().collect();
        let mut counts: HashMap<i64, usize> = HashMap::new();
        let draws = 6000;
        for _ in 0..draws {
            if let QuizOutcome::Question(q) =
                next_question(pool(), QuizScope::All, &asked, &mut rng).unwrap()
            {
                *counts.entry(q.id).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 5);
        assert!(!counts.contains_key(&2));
        for (id, count) in counts {
            // expected 1200 per candidate
            assert!((1000..1400).contains(&count), "id {id} drawn {count} times");
        }
    }
}
