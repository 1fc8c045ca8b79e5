// Accounts: password hashing, registration, login.

pub mod handlers;
pub mod password;
pub mod service;
