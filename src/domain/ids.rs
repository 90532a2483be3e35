use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const ACCOUNT_NUMBER_LEN: usize = 8;
pub const TRANSACTION_ID_LEN: usize = 6;

/// Returns a random uppercase hexadecimal token of `len` characters (max 32).
pub fn random_token(len: usize) -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(len);
    token.make_ascii_uppercase();
    token
}

/// Identifier of an account in the ledger.
///
/// Account numbers are opaque tokens. Construction trims surrounding
/// whitespace and uppercases, so `" ab12cd34 "` and `"AB12CD34"` address the
/// same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_ascii_uppercase())
    }

    pub fn generate() -> Self {
        Self(random_token(ACCOUNT_NUMBER_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
