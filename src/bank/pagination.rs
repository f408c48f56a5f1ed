use std::num::NonZeroUsize;

pub const QUESTIONS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

pub const FIRST_PAGE: NonZeroUsize = NonZeroUsize::MIN;

/// Returns the `page`-th (1-based) window of `page_size` items.
///
/// Pages past the end come back empty; deciding what an empty page means is up to the caller.
pub fn paginate<T>(items: &[T], page: NonZeroUsize, page_size: NonZeroUsize) -> &[T] {
    let offset = (page.get() - 1).saturating_mul(page_size.get());
    if offset >= items.len() {
        return &[];
    }
    let end = offset.saturating_add(page_size.get()).min(items.len());
    &items[offset..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn first_page_is_a_full_window() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(
            paginate(&items, FIRST_PAGE, QUESTIONS_PER_PAGE),
            &items[0..10]
        );
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, page(3), QUESTIONS_PER_PAGE), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=20).collect();
        assert!(paginate(&items, page(3), QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, page(usize::MAX), QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let items: Vec<i64> = vec![];
        assert!(paginate(&items, FIRST_PAGE, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn page_length_follows_the_boundary_formula() {
        for n in 0..35usize {
            let items: Vec<usize> = (0..n).collect();
            for p in 1..6usize {
                let expected = 10.min(n.saturating_sub(10 * (p - 1)));
                assert_eq!(
                    paginate(&items, page(p), QUESTIONS_PER_PAGE).len(),
                    expected,
                    "n={n} page={p}"
                );
            }
        }
    }
}
