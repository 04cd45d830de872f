use crate::core::repository::memory_repository::MemoryRepository;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;

pub fn create_member_repository() -> Box<dyn MemberRepository> {
    Box::new(MemoryRepository::<MemberEntity>::new("member"))
}
