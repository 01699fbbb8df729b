//! Offset pagination.

use crate::query::PageRequest;

/// Take one page out of an ordered sequence. Pages past the end are empty.
pub fn paginate<I>(items: I, page: PageRequest) -> Vec<I::Item>
where
    I: IntoIterator,
{
    items
        .into_iter()
        .skip(page.offset())
        .take(page.page_size())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: usize, size: usize) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[test]
    fn test_pages_over_25_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, page(1, 10)).len(), 10);
        assert_eq!(paginate(&items, page(2, 10)).len(), 10);
        assert_eq!(paginate(&items, page(3, 10)).len(), 5);
        assert!(paginate(&items, page(4, 10)).is_empty());
    }

    #[test]
    fn test_page_contents_start_at_offset() {
        let items: Vec<u32> = (0..25).collect();
        let third: Vec<u32> = paginate(items, page(3, 10));
        assert_eq!(third, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let items = vec!["a", "b"];
        assert!(paginate(items, page(usize::MAX, 100)).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        assert!(paginate(items, PageRequest::default()).is_empty());
    }
}
