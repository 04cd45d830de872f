use serde::{Deserialize, Serialize};

// LoanDto describes the state of a member and a book right after a borrow or return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDto {
    pub member_id: i64,
    pub isbn: String,
    pub available_copies: i64,
    pub borrowed_isbns: Vec<String>,
}
