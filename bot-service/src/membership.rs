use teloxide::prelude::*;
use teloxide::types::{ChatMemberKind, UserId};

/// How the gated channel sees a user, as reported by the Bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Owner,
    Administrator,
    Member,
    NotSubscribed,
}

pub fn classify_member(kind: &ChatMemberKind) -> SubscriptionStatus {
    if kind.is_owner() {
        SubscriptionStatus::Owner
    } else if kind.is_administrator() {
        SubscriptionStatus::Administrator
    } else if kind.is_member() {
        SubscriptionStatus::Member
    } else {
        SubscriptionStatus::NotSubscribed
    }
}

pub fn grants_access(status: SubscriptionStatus) -> bool {
    matches!(
        status,
        SubscriptionStatus::Owner | SubscriptionStatus::Administrator | SubscriptionStatus::Member
    )
}

/// Queries the channel for the user's membership. A failed query counts as
/// not subscribed: the user sees the corrective message and can retry.
pub async fn is_subscribed(bot: &Bot, channel_id: i64, user_id: UserId) -> bool {
    match bot.get_chat_member(ChatId(channel_id), user_id).await {
        Ok(member) => grants_access(classify_member(&member.kind)),
        Err(e) => {
            tracing::error!("Subscription check failed for user {}: {}", user_id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_member_grants_access() {
        assert!(grants_access(SubscriptionStatus::Member));
    }

    #[test]
    fn test_privileged_statuses_grant_access() {
        assert!(grants_access(SubscriptionStatus::Administrator));
        assert!(grants_access(SubscriptionStatus::Owner));
    }

    #[test]
    fn test_non_subscriber_is_denied() {
        assert!(!grants_access(SubscriptionStatus::NotSubscribed));
    }
}
