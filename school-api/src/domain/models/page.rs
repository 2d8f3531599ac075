/// A 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
    size: i64,
}

impl PageRequest {
    /// Returns `None` unless both the page number and the page size are at least 1.
    pub fn new(number: i64, size: i64) -> Option<Self> {
        if number < 1 || size < 1 {
            return None;
        }
        Some(Self { number, size })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn rejects_non_positive_parameters() {
        assert_eq!(PageRequest::new(0, 5), None);
        assert_eq!(PageRequest::new(1, 0), None);
        assert_eq!(PageRequest::new(-3, 2), None);
    }

    #[test]
    fn first_page_starts_at_zero() {
        let page = PageRequest::new(1, 2).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 2);
    }

    #[test]
    fn later_pages_skip_previous_ones() {
        let page = PageRequest::new(3, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }
}
