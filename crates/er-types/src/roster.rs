//! Local snapshot of user records held by the admin table.
//!
//! The snapshot is refreshed on mount and patched after each successful
//! mutation. A failed request never yields an action, so the rows shown are
//! always either the last snapshot or the snapshot plus confirmed changes.

use crate::users::UserRecord;

/// A confirmed change to the user collection.
#[derive(Clone, Debug, PartialEq)]
pub enum RosterAction {
    Loaded(Vec<UserRecord>),
    Created(UserRecord),
    Updated(UserRecord),
    Deleted(i64),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Roster {
    users: Vec<UserRecord>,
}

impl Roster {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Apply `action` and return the resulting roster.
    pub fn apply(mut self, action: RosterAction) -> Self {
        match action {
            RosterAction::Loaded(users) => self.users = users,
            RosterAction::Created(user) | RosterAction::Updated(user) => self.upsert(user),
            RosterAction::Deleted(id) => self.users.retain(|u| u.id != id),
        }
        self
    }

    fn upsert(&mut self, user: UserRecord) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user,
            None => self.users.push(user),
        }
    }

    pub fn get(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
