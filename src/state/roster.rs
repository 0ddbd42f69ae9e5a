#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::state::user::User;

/// The ordered collection of committed user records.
///
/// Owned by the root component as the single source of truth and mutated only
/// through [`Roster::append`] and [`Roster::remove`]; there is no edit
/// operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    pub users: Vec<User>,
}

impl Roster {
    /// Append a newly submitted record to the end of the sequence.
    pub fn append(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove the record matching `user` by creation-timestamp identity.
    ///
    /// Equality is on the string representation of the timestamp. The order
    /// of the remaining records is preserved.
    pub fn remove(&mut self, user: &User) {
        let key = user.created_key();
        self.users.retain(|u| u.created_key() != key);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
