use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookPatch};
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{Genre, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::lending::domain::LendingService;
use crate::lending::dto::LoanDto;
use crate::members::domain::Borrower;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;
use crate::members::repository::MemberRepository;

pub struct LendingServiceImpl {
    branch_id: String,
    max_loans: usize,
    book_repository: Box<dyn BookRepository>,
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               member_repository: Box<dyn MemberRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_loans: config.max_loans,
            book_repository,
            member_repository,
            events_publisher,
        }
    }

    fn book(&self, isbn: &str) -> LibraryResult<&BookEntity> {
        self.book_repository.get(&isbn.to_string()).map_err(|_|
            LibraryError::not_found(format!("Book ISBN {} not found.", isbn).as_str()))
    }

    fn member(&self, member_id: i64) -> LibraryResult<&MemberEntity> {
        self.member_repository.get(&member_id).map_err(|_|
            LibraryError::not_found(format!("Member ID {} not found.", member_id).as_str()))
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The mutation is already applied at this point, so a publishing failure is only logged.
    fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|e| self.events_publisher.publish(e));
        if let Err(err) = res {
            warn!("failed to publish domain event: {}", err);
        }
    }

    fn loan_of(&self, member_id: i64, isbn: &str) -> LibraryResult<LoanDto> {
        let member = self.member(member_id)?;
        let book = self.book(isbn)?;
        Ok(LoanDto {
            member_id,
            isbn: isbn.to_string(),
            available_copies: book.available_copies,
            borrowed_isbns: member.borrowed_isbns.clone(),
        })
    }
}

impl LendingService for LendingServiceImpl {
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, copies: i64) -> LibraryResult<BookDto> {
        if self.book_repository.exists(&isbn.to_string()) {
            return Err(LibraryError::duplicate_key(format!("ISBN {} already exists.", isbn).as_str()));
        }
        let genre = Genre::try_from(genre)?;
        if copies < 1 {
            return Err(LibraryError::invalid_quantity("Number of copies must be at least 1.", copies));
        }
        let book = BookEntity::new(isbn, title, author, genre, copies);
        let dto = BookDto::from(&book);
        self.book_repository.create(book)?;
        info!(isbn, copies, "book '{}' added", title);
        let event = DomainEvent::added("books", "books", isbn, &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    fn add_member(&mut self, member_id: i64, name: &str) -> LibraryResult<MemberDto> {
        if self.member_repository.exists(&member_id) {
            return Err(LibraryError::duplicate_key(format!("Member ID {} already exists.", member_id).as_str()));
        }
        let member = MemberEntity::new(member_id, name);
        let dto = MemberDto::from(&member);
        self.member_repository.create(member)?;
        info!(member_id, "member '{}' added", name);
        let event = DomainEvent::added("members", "members", member_id.to_string().as_str(), &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    fn search_books(&self, query: &str) -> Vec<(String, BookDto)> {
        self.book_repository.search(query).into_iter()
            .map(|b| (b.isbn.to_string(), BookDto::from(b)))
            .collect()
    }

    fn update_book(&mut self, isbn: &str, patch: &BookPatch) -> LibraryResult<BookDto> {
        let mut book = self.book(isbn)?.clone();
        let genre = patch.genre.as_deref().map(Genre::try_from).transpose()?;
        let available = match patch.copies {
            Some(copies) if copies < 0 => {
                return Err(LibraryError::negative_quantity("Copies cannot be negative.", copies));
            }
            Some(copies) => {
                let borrowed = self.member_repository.count_loans_of(isbn);
                if copies < borrowed {
                    return Err(LibraryError::insufficient_total(copies, borrowed));
                }
                info!(isbn, borrowed, available = copies - borrowed, "book copies updated");
                Some(copies - borrowed)
            }
            None => None,
        };

        if let Some(title) = &patch.title {
            book.title = title.to_string();
        }
        if let Some(author) = &patch.author {
            book.author = author.to_string();
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        if let Some(available) = available {
            book.available_copies = available;
        }
        self.book_repository.update(book)?;
        let dto = BookDto::from(self.book(isbn)?);
        info!(isbn, "book updated");
        let event = DomainEvent::updated("books", "books", isbn, &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    fn update_member(&mut self, member_id: i64, name: Option<&str>) -> LibraryResult<MemberDto> {
        let mut member = self.member(member_id)?.clone();
        let Some(name) = name else {
            return Ok(MemberDto::from(&member));
        };
        member.name = name.to_string();
        self.member_repository.update(member)?;
        let dto = MemberDto::from(self.member(member_id)?);
        info!(member_id, "member name updated to {}", name);
        let event = DomainEvent::updated("members", "members", member_id.to_string().as_str(), &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    fn delete_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let _ = self.book(isbn)?;
        if self.member_repository.is_on_loan(isbn) {
            return Err(LibraryError::has_active_loans(
                format!("Book ISBN {} is currently borrowed by a member.", isbn).as_str()));
        }
        let removed = self.book_repository.delete(&isbn.to_string())?;
        let dto = BookDto::from(&removed);
        info!(isbn, "book deleted");
        let event = DomainEvent::deleted("books", "books", isbn, &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    fn delete_member(&mut self, member_id: i64) -> LibraryResult<MemberDto> {
        if self.member(member_id)?.has_loans() {
            return Err(LibraryError::has_active_loans(
                format!("Member ID {} has borrowed books.", member_id).as_str()));
        }
        let removed = self.member_repository.delete(&member_id)?;
        let dto = MemberDto::from(&removed);
        info!(member_id, "member deleted");
        let event = DomainEvent::deleted("members", "members", member_id.to_string().as_str(), &self.metadata(), &dto);
        self.publish(event);
        Ok(dto)
    }

    // A member may hold the same isbn twice when more than one copy is on the shelf;
    // copies are not tracked individually.
    fn borrow_book(&mut self, member_id: i64, isbn: &str) -> LibraryResult<LoanDto> {
        let mut member = self.member(member_id)?.clone();
        let mut book = self.book(isbn)?.clone();
        if member.is_at_limit(self.max_loans) {
            return Err(LibraryError::limit_exceeded(self.max_loans));
        }
        if !book.has_available_copy() {
            return Err(LibraryError::no_copies_available(
                format!("No available copies of ISBN {}.", isbn).as_str()));
        }
        book.available_copies -= 1;
        member.borrowed_isbns.push(isbn.to_string());
        self.book_repository.update(book)?;
        self.member_repository.update(member)?;

        let loan = self.loan_of(member_id, isbn)?;
        info!(member_id, isbn, available = loan.available_copies, "book borrowed");
        let event = DomainEvent::borrowed("book_borrowed", "loans", isbn, &self.metadata(), &loan);
        self.publish(event);
        Ok(loan)
    }

    fn return_book(&mut self, member_id: i64, isbn: &str) -> LibraryResult<LoanDto> {
        let mut member = self.member(member_id)?.clone();
        if !member.remove_loan(isbn) {
            return Err(LibraryError::not_borrowed(
                format!("Member ID {} did not borrow ISBN {}.", member_id, isbn).as_str()));
        }
        let mut book = self.book(isbn)?.clone();
        book.available_copies += 1;
        self.book_repository.update(book)?;
        self.member_repository.update(member)?;

        let loan = self.loan_of(member_id, isbn)?;
        info!(member_id, isbn, available = loan.available_copies, "book returned");
        let event = DomainEvent::returned("book_returned", "loans", isbn, &self.metadata(), &loan);
        self.publish(event);
        Ok(loan)
    }

    fn find_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book(isbn).map(BookDto::from)
    }

    fn find_member(&self, member_id: i64) -> LibraryResult<MemberDto> {
        self.member(member_id).map(MemberDto::from)
    }

    fn books(&self) -> Vec<BookDto> {
        self.book_repository.records().iter().map(BookDto::from).collect()
    }

    fn members(&self) -> Vec<MemberDto> {
        self.member_repository.records().iter().map(MemberDto::from).collect()
    }

    fn borrowed_count(&self, isbn: &str) -> i64 {
        self.member_repository.count_loans_of(isbn)
    }

    fn drain_events(&mut self) -> Vec<DomainEvent> {
        self.events_publisher.drain()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre,
            available_copies: other.available_copies,
        }
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id,
            version: other.version,
            name: other.name.to_string(),
            borrowed_isbns: other.borrowed_isbns.clone(),
        }
    }
}
