//! User directory feature state.

use roster_api_models::{NewUser, UserRecord};

/// Text placed between the username and the email in a rendered item.
pub const FIELD_SEPARATOR: &str = " - ";

/// Users currently rendered in the display region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    /// Records in the order the backend returned them.
    pub items: Vec<UserRecord>,
}

impl UsersState {
    /// Replace the rendered collection with a fresh backend response.
    pub fn replace(&mut self, users: Vec<UserRecord>) {
        self.items = users;
    }

    /// Number of rendered items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the display region renders nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Mutable create-form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormState {
    /// Value of the username control.
    pub username: String,
    /// Value of the email control.
    pub email: String,
}

impl UserFormState {
    /// Return every control to its default (empty) value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request document from the current values, verbatim.
    #[must_use]
    pub fn to_new_user(&self) -> NewUser {
        NewUser::new(self.username.clone(), self.email.clone())
    }
}
