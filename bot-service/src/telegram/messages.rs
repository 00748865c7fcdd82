use shared::Submission;

pub fn welcome_message() -> &'static str {
    "🎄 The wish season is open!\n\n\
    We are running a holiday giveaway where everyone gets to make one wish, \
    and at the end of the season we pick the lucky participants and make \
    their wishes come true!\n\n\
    Want in?\n\
    Tap the button below and let's get you registered ✨"
}

pub fn activity_prompt() -> &'static str {
    "Great, your wish is on the list!\n\n\
    🚀 To seal your entry, create an account on our site and make a minimal \
    deposit, and stay subscribed to our Telegram channel. All of it counts \
    toward winning 🎄\n\n\
    Visit the site and subscribe to the channel, then tap \"I've been active\"."
}

pub fn format_submission_notification(submission: &Submission) -> String {
    let username = submission.username.as_deref().unwrap_or("no username");

    format!(
        "New submission 🎁\n\n\
        👤 User: {} (@{})\n\
        🆔 user_id: {}\n\n\
        📧 Email: {}\n\
        ℹ️ About: {}\n\
        🎁 Wish: {}",
        submission.full_name,
        username,
        submission.user_id,
        submission.email,
        submission.about,
        submission.wish
    )
}
