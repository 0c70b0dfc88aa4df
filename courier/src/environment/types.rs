use courier_core_contact_impl::ContactFeatureServiceImpl;
use courier_extern_impl::{discord::DiscordApiServiceImpl, recaptcha::RecaptchaApiServiceImpl};
use courier_shared_impl::captcha::CaptchaServiceImpl;

// API
pub type RestServer = courier_api_rest::RestServer<ContactFeature>;

// Extern
pub type RecaptchaApi = RecaptchaApiServiceImpl;
pub type DiscordApi = DiscordApiServiceImpl;

// Shared
pub type Captcha = CaptchaServiceImpl<RecaptchaApi>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Captcha, DiscordApi>;
