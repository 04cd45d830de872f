use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::Borrower;

// MemberDto is a data transfer object for a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: i64,
    pub version: i64,
    pub name: String,
    pub borrowed_isbns: Vec<String>,
}

impl Identifiable for MemberDto {
    type Key = i64;

    fn id(&self) -> i64 {
        self.member_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Borrower for MemberDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn loans(&self) -> &[String] {
        &self.borrowed_isbns
    }
}
