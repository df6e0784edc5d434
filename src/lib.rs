//! User-account service: create a user, look one up by email.

pub mod app;
pub mod config;
pub mod context;
pub mod state;
pub mod users;
