pub mod service;

use crate::books::dto::{BookDto, BookPatch};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::lending::dto::LoanDto;
use crate::members::dto::MemberDto;

/// LendingService owns the catalog and the member roll and enforces the
/// borrowing rules across both. Every operation either applies completely or
/// leaves the store untouched and reports why.
pub trait LendingService {
    /// Registers a new title with `copies` copies on the shelf.
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, copies: i64) -> LibraryResult<BookDto>;

    fn add_member(&mut self, member_id: i64, name: &str) -> LibraryResult<MemberDto>;

    /// Case-insensitive substring search over title and author, in catalog order.
    /// An empty result is not an error.
    fn search_books(&self, query: &str) -> Vec<(String, BookDto)>;

    /// Applies the provided fields of `patch`. All fields are validated before
    /// anything is written. `copies` replaces the total count, loaned copies included.
    fn update_book(&mut self, isbn: &str, patch: &BookPatch) -> LibraryResult<BookDto>;

    fn update_member(&mut self, member_id: i64, name: Option<&str>) -> LibraryResult<MemberDto>;

    /// Fails while any member holds a loan of the book.
    fn delete_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;

    /// Fails while the member holds any loan.
    fn delete_member(&mut self, member_id: i64) -> LibraryResult<MemberDto>;

    fn borrow_book(&mut self, member_id: i64, isbn: &str) -> LibraryResult<LoanDto>;

    fn return_book(&mut self, member_id: i64, isbn: &str) -> LibraryResult<LoanDto>;

    fn find_book(&self, isbn: &str) -> LibraryResult<BookDto>;

    fn find_member(&self, member_id: i64) -> LibraryResult<MemberDto>;

    fn books(&self) -> Vec<BookDto>;

    fn members(&self) -> Vec<MemberDto>;

    /// Number of copies of `isbn` currently on loan across all members.
    fn borrowed_count(&self, isbn: &str) -> i64;

    fn drain_events(&mut self) -> Vec<DomainEvent>;
}
