use nutype::nutype;

pub mod contact;

/// Token returned by the reCAPTCHA widget, passed through verbatim to the
/// siteverify API.
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct RecaptchaResponse(String);
