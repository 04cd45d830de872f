use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Genre;

// BookDto is a data transfer object for the lending service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub available_copies: i64,
}

impl Identifiable for BookDto {
    type Key = String;

    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
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

// BookPatch carries the fields of an update; None leaves the field untouched,
// which is distinct from Some("") replacing it with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    // replaces the TOTAL number of copies, loaned ones included
    #[serde(default)]
    pub copies: Option<i64>,
}

impl BookPatch {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn copies(mut self, copies: i64) -> Self {
        self.copies = Some(copies);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none() && self.copies.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookPatch;

    #[test]
    fn test_should_build_patch() {
        let patch = BookPatch::default().title("New").copies(5);
        assert_eq!(Some("New".to_string()), patch.title);
        assert_eq!(None, patch.author);
        assert_eq!(None, patch.genre);
        assert_eq!(Some(5), patch.copies);
        assert!(!patch.is_empty());
        assert!(BookPatch::default().is_empty());
    }

    #[test]
    fn test_should_distinguish_empty_from_absent() {
        let patch: BookPatch = serde_json::from_str("{\"title\":\"\"}").expect("should parse patch");
        assert_eq!(Some("".to_string()), patch.title);
        assert_eq!(None, patch.author);
    }
}
