use crate::core::domain::Identifiable;

pub mod model;

pub trait Borrower: Identifiable<Key = i64> {
    fn name(&self) -> &str;
    fn loans(&self) -> &[String];

    fn has_loans(&self) -> bool {
        !self.loans().is_empty()
    }

    fn holds(&self, isbn: &str) -> bool {
        self.loans().iter().any(|l| l == isbn)
    }

    fn count_loans_of(&self, isbn: &str) -> i64 {
        self.loans().iter().filter(|l| *l == isbn).count() as i64
    }

    fn is_at_limit(&self, max_loans: usize) -> bool {
        self.loans().len() >= max_loans
    }
}
