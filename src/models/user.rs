use serde::{Deserialize, Serialize};

/// A registered user. The password digest never leaves the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}
