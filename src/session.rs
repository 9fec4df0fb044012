//! Who is looking at the screen.
//!
//! A [`Session`] is handed by reference to the views that behave differently
//! for signed-in users, such as the clinic carousel's booking action. The
//! application owns it and replaces it on sign-in or sign-out.

use serde::Deserialize;

/// Account role as reported by the clinic service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pet owner; may book appointments.
    Customer,
    /// Clinic staff vet.
    Veterinarian,
    /// Clinic manager.
    Manager,
    /// Platform administrator.
    Admin,
}

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Account id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Account role.
    pub role: Role,
}

/// The current viewer: a guest or a signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// A session with nobody signed in.
    pub fn guest() -> Self {
        Self::default()
    }

    /// A session for `user`.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns true if someone is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Only customers book appointments.
    pub fn can_book(&self) -> bool {
        self.role() == Some(Role::Customer)
    }
}
