use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn make_join_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🎁 Count me in",
        "join",
    )]])
}

pub fn make_activity_keyboard(site_url: &str, channel_invite_url: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "🌐 Visit the site",
            site_url.parse().expect("Invalid site URL"),
        )],
        vec![InlineKeyboardButton::url(
            "💬 Telegram channel",
            channel_invite_url.parse().expect("Invalid channel invite URL"),
        )],
        vec![InlineKeyboardButton::callback(
            "✅ I've been active",
            "check_active",
        )],
    ])
}
