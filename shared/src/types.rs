/// The finalized set of collected answers, assembled once the activity
/// check passes and forwarded to the admin recipient. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user_id: u64,
    pub full_name: String,
    pub username: Option<String>,
    pub email: String,
    pub about: String,
    pub wish: String,
}
