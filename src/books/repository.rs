use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // books whose title or author contains the query, in catalog order
    fn search(&self, query: &str) -> Vec<&BookEntity> {
        self.records().iter().filter(|b| b.matches(query)).collect()
    }
}

impl BookRepository for MemoryRepository<BookEntity> {}
