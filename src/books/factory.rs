use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::repository::memory_repository::MemoryRepository;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryRepository::<BookEntity>::new("book"))
}
