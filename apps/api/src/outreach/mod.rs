//! Outreach: cold-email drafts for right-swiped jobs, their storage, and
//! delivery.

pub mod drafting;
pub mod drafts;
pub mod handlers;
pub mod mailer;
pub mod prompts;
