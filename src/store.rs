use crate::domain::NewAccount;

/// A validated triple exactly as accepted: trimmed at validation time and
/// never touched again. The password is stored in the clear because the
/// host displays it in its table, mirroring the grid the records feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub user_name: String,
    pub password: String,
    pub date_of_create_account: String,
}

impl From<NewAccount> for AccountRecord {
    fn from(account: NewAccount) -> Self {
        Self {
            user_name: account.user_name.as_ref().to_owned(),
            password: account.password.expose_secret().to_owned(),
            date_of_create_account: account.date_of_create_account.as_ref().to_owned(),
        }
    }
}

/// The append-only, in-memory collection of accepted records, in insertion
/// order. Duplicates are permitted: nothing makes user names unique. One
/// instance per session, owned by a single caller; there is no internal
/// locking, so a concurrent host has to serialize access itself.
#[derive(Debug, Default)]
pub struct AccountStore {
    records: Vec<AccountRecord>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a validated submission into the store. Taking a
    /// `NewAccount` rather than raw strings is what enforces the contract:
    /// the only way to construct one is to pass validation.
    #[tracing::instrument(
        name = "Appending an accepted record",
        skip(self, account),
        fields(user_name = %account.user_name.as_ref(), total = self.records.len() + 1)
    )]
    pub fn append(&mut self, account: NewAccount) {
        self.records.push(account.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of every record, oldest first. The shared reference
    /// means callers can look but not touch.
    pub fn records(&self) -> &[AccountRecord] {
        &self.records
    }
}
