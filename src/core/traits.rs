//! Core trait abstractions
//!
//! This module defines the seams between the ledger core and its
//! persistence collaborators, so different backing stores (an on-disk
//! JSON document, an in-memory map for tests) are interchangeable.

use crate::types::{LedgerError, User};

/// A string-keyed document store
///
/// The narrow interface the ledger persists through: synchronous
/// get/set/remove of whole string values, one document per key. This is
/// the local-storage shape of the original design; implementations
/// decide where the bytes live.
pub trait DocumentStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError>;

    /// Remove `key` and its value, if present
    ///
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), LedgerError>;
}

/// The user record repository
///
/// Maintains the ordered collection of registered users (unique by
/// email, matched case-sensitively) and the pointer to the current
/// user. All operations are synchronous; every mutation rewrites the
/// whole user list so a single logical actor never observes a torn
/// update.
pub trait UserRepository {
    /// All registered users, in registration order
    fn list_users(&self) -> Result<Vec<User>, LedgerError>;

    /// Add a new user
    ///
    /// # Errors
    ///
    /// [`LedgerError::DuplicateEmail`] if the email is already registered.
    fn add_user(&mut self, user: User) -> Result<(), LedgerError>;

    /// Find a user by exact email match
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, LedgerError>;

    /// The user the current-user pointer names, if any
    fn current_user(&self) -> Result<Option<User>, LedgerError>;

    /// Point the current-user pointer at a registered email
    ///
    /// # Errors
    ///
    /// [`LedgerError::UserNotFound`] if no user has that email; the
    /// pointer is only ever allowed to name a stored user.
    fn set_current_user(&mut self, email: &str) -> Result<(), LedgerError>;

    /// Replace the user stored under `email` with `user`
    ///
    /// This is how every profile update and import lands: the caller
    /// fetches, mutates and hands back the whole record.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UserNotFound`] if no user has that email.
    fn replace_user(&mut self, email: &str, user: User) -> Result<(), LedgerError>;

    /// Clear the current-user pointer
    fn logout(&mut self) -> Result<(), LedgerError>;
}
