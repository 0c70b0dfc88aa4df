pub mod discord;
pub mod recaptcha;
