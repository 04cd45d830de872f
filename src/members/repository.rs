use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::Repository;
use crate::members::domain::Borrower;
use crate::members::domain::model::MemberEntity;

pub trait MemberRepository: Repository<MemberEntity> {
    // total loans of isbn across every member
    fn count_loans_of(&self, isbn: &str) -> i64 {
        self.records().iter().map(|m| m.count_loans_of(isbn)).sum()
    }

    fn is_on_loan(&self, isbn: &str) -> bool {
        self.records().iter().any(|m| m.holds(isbn))
    }
}

impl MemberRepository for MemoryRepository<MemberEntity> {}
