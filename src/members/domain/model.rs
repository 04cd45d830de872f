use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::memory_repository::Stamped;
use crate::members::domain::Borrower;
use crate::utils::date::serializer;

// MemberEntity abstracts a registered library member and the ISBNs they hold, in borrowing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: i64,
    pub version: i64,
    pub name: String,
    pub borrowed_isbns: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(member_id: i64, name: &str) -> Self {
        Self {
            member_id,
            version: 0,
            name: name.to_string(),
            borrowed_isbns: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // removes the first occurrence of isbn, returns false when it was not on loan
    pub fn remove_loan(&mut self, isbn: &str) -> bool {
        match self.borrowed_isbns.iter().position(|l| l == isbn) {
            Some(pos) => {
                self.borrowed_isbns.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Identifiable for MemberEntity {
    type Key = i64;

    fn id(&self) -> i64 {
        self.member_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Stamped for MemberEntity {
    fn touch(&mut self, version: i64) {
        self.version = version;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Borrower for MemberEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn loans(&self) -> &[String] {
        &self.borrowed_isbns
    }
}

#[cfg(test)]
mod tests {
    use crate::members::domain::Borrower;
    use crate::members::domain::model::MemberEntity;

    #[test]
    fn test_should_build_member() {
        let member = MemberEntity::new(101, "Alice");
        assert_eq!(101, member.member_id);
        assert_eq!("Alice", member.name.as_str());
        assert!(!member.has_loans());
        assert!(!member.is_at_limit(3));
    }

    #[test]
    fn test_should_remove_one_loan_occurrence() {
        let mut member = MemberEntity::new(1, "Bob");
        member.borrowed_isbns = vec!["B1".to_string(), "B2".to_string(), "B1".to_string()];
        assert_eq!(2, member.count_loans_of("B1"));
        assert!(member.is_at_limit(3));
        assert!(member.remove_loan("B1"));
        assert_eq!(vec!["B2".to_string(), "B1".to_string()], member.borrowed_isbns);
        assert!(!member.remove_loan("B9"));
        assert!(member.holds("B1"));
    }
}
