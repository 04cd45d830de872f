use std::fmt::Display;
use std::hash::Hash;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    type Key: Eq + Hash + Clone + Display;

    fn id(&self) -> Self::Key;
    fn version(&self) -> i64;
}

pub const DEFAULT_MAX_LOANS: usize = 3;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_loans: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_loans: DEFAULT_MAX_LOANS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(3, config.max_loans);
    }
}
