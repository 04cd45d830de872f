use std::{env, fs};
use serde::Serialize;
use tracing::{info, Level};
use library_lending::books::dto::BookDto;
use library_lending::core::domain::Configuration;
use library_lending::core::library::LibraryError;
use library_lending::gateway::GatewayPublisherVia;
use library_lending::lending::command::LendingRequest;
use library_lending::lending::factory::create_lending_service;
use library_lending::members::dto::MemberDto;
use library_lending::utils::logs::setup_tracing;

// Replays a script of lending requests against a fresh store. Without arguments
// the built-in walkthrough is used; otherwise the first argument names a JSON file
// holding an array of requests.

#[derive(Serialize)]
struct FinalState {
    books: Vec<BookDto>,
    members: Vec<MemberDto>,
}

fn main() -> Result<(), LibraryError> {
    let level = env::var("LENDING_LOG")
        .ok()
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    setup_tracing(level);

    let branch = env::var("LENDING_BRANCH").unwrap_or_else(|_| "main".to_string());
    let config = Configuration::new(branch.as_str());
    let mut svc = create_lending_service(&config, GatewayPublisherVia::Log);

    let script = match env::args().nth(1) {
        Some(path) => LendingRequest::parse_script(fs::read_to_string(path)?.as_str())?,
        None => walkthrough(),
    };
    info!(branch = branch.as_str(), requests = script.len(), "replaying lending script");

    for req in script {
        let name = req.name();
        let reply = req.run(svc.as_mut());
        if reply.success {
            info!(operation = name, "{}", reply.message);
        }
        for (isbn, book) in reply.books.iter() {
            info!(operation = name, isbn = isbn.as_str(), "{} by {} ({}), copies: {}",
                  book.title, book.author, book.genre, book.available_copies);
        }
    }

    let state = FinalState {
        books: svc.books(),
        members: svc.members(),
    };
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn walkthrough() -> Vec<LendingRequest> {
    let add_book = |isbn: &str, title: &str, author: &str, genre: &str, copies: i64| LendingRequest::AddBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        copies,
    };
    let add_member = |member_id: i64, name: &str| LendingRequest::AddMember { member_id, name: name.to_string() };
    let search = |query: &str| LendingRequest::SearchBooks { query: query.to_string() };
    let borrow = |member_id: i64, isbn: &str| LendingRequest::BorrowBook { member_id, isbn: isbn.to_string() };
    let give_back = |member_id: i64, isbn: &str| LendingRequest::ReturnBook { member_id, isbn: isbn.to_string() };

    vec![
        add_book("ISBN001", "The Hobbit", "J.R.R. Tolkien", "Fantasy", 3),
        add_book("ISBN002", "1984", "George Orwell", "Fiction", 2),
        add_book("ISBN003", "Dune", "Frank Herbert", "Sci-Fi", 1),
        add_book("ISBN001", "Duplicate Book", "Author", "Fiction", 1),
        add_member(101, "Alice"),
        add_member(102, "Bob"),
        add_member(101, "Charlie"),
        search("the"),
        search("George"),
        search("xyz"),
        borrow(101, "ISBN001"),
        borrow(101, "ISBN002"),
        borrow(101, "ISBN003"),
        borrow(101, "ISBN002"),
        borrow(102, "ISBN001"),
        borrow(102, "ISBN001"),
        give_back(101, "ISBN001"),
        give_back(101, "ISBN999"),
        give_back(102, "ISBN001"),
        LendingRequest::UpdateBook {
            isbn: "ISBN002".to_string(), title: None, author: None, genre: None, copies: Some(5),
        },
        LendingRequest::UpdateBook {
            isbn: "ISBN004".to_string(), title: Some("New".to_string()), author: None, genre: None, copies: None,
        },
        LendingRequest::DeleteBook { isbn: "ISBN002".to_string() },
        LendingRequest::DeleteBook { isbn: "ISBN003".to_string() },
        LendingRequest::DeleteMember { member_id: 102 },
        LendingRequest::DeleteMember { member_id: 103 },
    ]
}
