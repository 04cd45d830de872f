use crate::core::domain::Identifiable;
use crate::core::library::Genre;

pub mod model;

pub trait Book: Identifiable<Key = String> {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn genre(&self) -> Genre;
    fn available_copies(&self) -> i64;

    fn has_available_copy(&self) -> bool {
        self.available_copies() > 0
    }

    // case-insensitive substring match against title or author
    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title().to_lowercase().contains(&query) || self.author().to_lowercase().contains(&query)
    }
}
