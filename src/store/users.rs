//! User repository over a document store
//!
//! `UserStore` keeps the whole user list as one JSON document under
//! `listOfUsers` and the current user's email under `current_user`,
//! the same two-key layout the original kept in browser local storage.
//! Typed [`User`]/[`crate::types::CreditCard`] values are rehydrated
//! from the plain nested JSON on every read.
//!
//! Every mutation is a whole-list read-modify-write, so from the
//! engine's perspective the list is always replaced atomically.

use crate::core::traits::{DocumentStore, UserRepository};
use crate::types::{LedgerError, User};

/// Document key holding the JSON-serialized list of all users
pub const USERS_KEY: &str = "listOfUsers";
/// Document key holding the current user's email
pub const CURRENT_USER_KEY: &str = "current_user";

/// User repository persisting through any [`DocumentStore`]
#[derive(Debug)]
pub struct UserStore<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> UserStore<S> {
    /// Create a repository over the given document store
    pub fn new(store: S) -> Self {
        UserStore { store }
    }

    /// Load and rehydrate the full user list
    ///
    /// An absent document reads as an empty list. A document that no
    /// longer deserializes is a storage failure, logged and re-raised.
    fn load_users(&self) -> Result<Vec<User>, LedgerError> {
        match self.store.get(USERS_KEY)? {
            Some(text) => serde_json::from_str(&text).map_err(|error| {
                log::error!("user list document is corrupted: {error}");
                LedgerError::storage_unavailable(format!(
                    "user list document is corrupted: {error}"
                ))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and persist the full user list
    fn save_users(&mut self, users: &[User]) -> Result<(), LedgerError> {
        let text = serde_json::to_string(users).map_err(|error| {
            log::error!("failed to serialize user list: {error}");
            LedgerError::storage_unavailable(format!("cannot serialize user list: {error}"))
        })?;
        self.store.set(USERS_KEY, &text)
    }
}

impl<S: DocumentStore> UserRepository for UserStore<S> {
    fn list_users(&self) -> Result<Vec<User>, LedgerError> {
        self.load_users()
    }

    fn add_user(&mut self, user: User) -> Result<(), LedgerError> {
        let mut users = self.load_users()?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(LedgerError::duplicate_email(&user.email));
        }
        users.push(user);
        self.save_users(&users)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, LedgerError> {
        let users = self.load_users()?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    fn current_user(&self) -> Result<Option<User>, LedgerError> {
        match self.store.get(CURRENT_USER_KEY)? {
            // A stale pointer to a missing user reads as "nobody logged in"
            Some(email) => self.find_user_by_email(&email),
            None => Ok(None),
        }
    }

    fn set_current_user(&mut self, email: &str) -> Result<(), LedgerError> {
        if self.find_user_by_email(email)?.is_none() {
            return Err(LedgerError::user_not_found(email));
        }
        self.store.set(CURRENT_USER_KEY, email)
    }

    fn replace_user(&mut self, email: &str, user: User) -> Result<(), LedgerError> {
        let mut users = self.load_users()?;
        let index = users
            .iter()
            .position(|existing| existing.email == email)
            .ok_or_else(|| LedgerError::user_not_found(email))?;
        users[index] = user;
        self.save_users(&users)
    }

    fn logout(&mut self) -> Result<(), LedgerError> {
        self.store.remove(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{CardStatus, CreditCard, Transaction};
    use chrono::NaiveDate;

    fn user(email: &str) -> User {
        User::new(
            email,
            "Abcdefg1!",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            CreditCard::new("1234 5678 9012 3456", "12/30"),
            1,
        )
    }

    fn repo() -> UserStore<MemoryStore> {
        UserStore::new(MemoryStore::new())
    }

    #[test]
    fn test_empty_store_lists_no_users() {
        assert!(repo().list_users().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_find_user() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();

        let found = repo.find_user_by_email("a@b.com").unwrap().unwrap();
        assert_eq!(found.email, "a@b.com");
        assert!(repo.find_user_by_email("x@y.com").unwrap().is_none());
    }

    #[test]
    fn test_email_lookup_is_case_sensitive() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();
        assert!(repo.find_user_by_email("A@b.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();
        assert_eq!(
            repo.add_user(user("a@b.com")),
            Err(LedgerError::duplicate_email("a@b.com"))
        );
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_users_keep_registration_order() {
        let mut repo = repo();
        repo.add_user(user("first@b.com")).unwrap();
        repo.add_user(user("second@b.com")).unwrap();

        let emails: Vec<String> = repo
            .list_users()
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, ["first@b.com", "second@b.com"]);
    }

    #[test]
    fn test_current_user_round_trip() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();

        assert!(repo.current_user().unwrap().is_none());
        repo.set_current_user("a@b.com").unwrap();
        assert_eq!(repo.current_user().unwrap().unwrap().email, "a@b.com");

        repo.logout().unwrap();
        assert!(repo.current_user().unwrap().is_none());
    }

    #[test]
    fn test_set_current_user_requires_registration() {
        let mut repo = repo();
        assert_eq!(
            repo.set_current_user("ghost@b.com"),
            Err(LedgerError::user_not_found("ghost@b.com"))
        );
    }

    #[test]
    fn test_replace_user_updates_in_place() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();

        let mut updated = user("a@b.com");
        updated.card_status = CardStatus::Locked;
        updated
            .transactions
            .push(Transaction::new("01/15/2024", "Cafe", "Food", "10"));
        repo.replace_user("a@b.com", updated).unwrap();

        let stored = repo.find_user_by_email("a@b.com").unwrap().unwrap();
        assert_eq!(stored.card_status, CardStatus::Locked);
        assert_eq!(stored.transactions.len(), 1);
    }

    #[test]
    fn test_replace_unknown_user_fails() {
        let mut repo = repo();
        assert_eq!(
            repo.replace_user("ghost@b.com", user("ghost@b.com")),
            Err(LedgerError::user_not_found("ghost@b.com"))
        );
    }

    #[test]
    fn test_rehydration_preserves_typed_card() {
        let mut repo = repo();
        repo.add_user(user("a@b.com")).unwrap();

        // Every read deserializes from the stored JSON document
        let rehydrated = repo.find_user_by_email("a@b.com").unwrap().unwrap();
        assert_eq!(rehydrated.credit_card.last_four_digits(), "3456");
        assert_eq!(rehydrated.billing_date, 1);
        assert_eq!(rehydrated.card_status, CardStatus::Active);
    }

    #[test]
    fn test_corrupted_user_document_is_storage_unavailable() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "{not a list").unwrap();

        let repo = UserStore::new(store);
        assert!(matches!(
            repo.list_users(),
            Err(LedgerError::StorageUnavailable { .. })
        ));
    }
}
