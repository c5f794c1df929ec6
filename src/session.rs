//! Explicit session context: the signed-in user plus static reference data.
//!
//! There is no ambient current-user singleton; a `Session` is created once at
//! session start, passed into the operations that need identity or reference
//! data, and dropped at session end.

use crate::errors::StoreError;
use crate::model::{Department, Profile, User};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    current_user_id: String,
    users: Vec<User>,
    departments: Vec<Department>,
}

impl Session {
    /// Builds a session, checking that the signed-in user exists and every
    /// user's department is in the reference set.
    pub fn new(
        current_user_id: impl Into<String>,
        users: Vec<User>,
        departments: Vec<Department>,
    ) -> Result<Self, StoreError> {
        let current_user_id = current_user_id.into();
        if !users.iter().any(|u| u.id == current_user_id) {
            return Err(StoreError::UnknownUser {
                user_id: current_user_id,
            });
        }
        for user in &users {
            if !departments.iter().any(|d| d.id == user.department_id) {
                return Err(StoreError::UnknownDepartment {
                    department_id: user.department_id.clone(),
                });
            }
        }
        Ok(Self {
            current_user_id,
            users,
            departments,
        })
    }

    pub fn current_user(&self) -> &User {
        self.users
            .iter()
            .find(|u| u.id == self.current_user_id)
            .expect("current user validated at construction")
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Display name for an id, falling back to the id itself for unknown users.
    pub fn display_name<'a>(&'a self, user_id: &'a str) -> &'a str {
        self.user(user_id).map_or(user_id, |u| u.name.as_str())
    }

    /// Replaces a user's profile. Profiles are mutable by their owner only;
    /// any other requester is a silent no-op.
    pub fn update_profile(&mut self, user_id: &str, requester_id: &str, profile: Profile) {
        if user_id != requester_id {
            return;
        }
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.profile = Some(profile);
        }
    }
}
