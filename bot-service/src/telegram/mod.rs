pub mod handlers;
mod keyboards;
mod messages;

pub use keyboards::{make_activity_keyboard, make_join_keyboard};
pub use messages::{activity_prompt, format_submission_notification, welcome_message};
