use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Genre;
use crate::core::repository::memory_repository::Stamped;
use crate::utils::date::serializer;

// BookEntity abstracts a title in the catalog. Copies are not tracked individually,
// only the number currently on the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub available_copies: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: Genre, copies: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre,
            available_copies: copies,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    type Key = String;

    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Stamped for BookEntity {
    fn touch(&mut self, version: i64) {
        self.version = version;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn genre(&self) -> Genre {
        self.genre
    }

    fn available_copies(&self) -> i64 {
        self.available_copies
    }
}
