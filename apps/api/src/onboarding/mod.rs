// Onboarding: wizard preferences, their validation and persistence.

pub mod handlers;
pub mod store;
pub mod validation;
