/// Dialogue state of one registration conversation. Answers collected so
/// far ride in the variant payloads, so a state always carries exactly
/// what its position in the flow implies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    AwaitingEmail,
    AwaitingAbout {
        email: String,
    },
    AwaitingWish {
        email: String,
        about: String,
    },
    AwaitingActivityCheck {
        email: String,
        about: String,
        wish: String,
    },
}
