//! Feature slices (state plus views).
pub mod health;
pub mod users;
