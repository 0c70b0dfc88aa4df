//! Standalone fakes of the external APIs the backend talks to, for local
//! development and integration tests.

pub mod discord;
pub mod recaptcha;
