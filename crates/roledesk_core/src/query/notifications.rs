//! Per-recipient notification views.

use crate::model::notification::{Notification, NotificationKind};
use crate::store::DomainStore;

pub fn notifications_for<'a>(store: &'a DomainStore, user_id: &str) -> Vec<&'a Notification> {
    store
        .notifications()
        .iter()
        .filter(|notif| notif.user_id == user_id)
        .collect()
}

pub fn unread_for<'a>(store: &'a DomainStore, user_id: &str) -> Vec<&'a Notification> {
    store
        .notifications()
        .iter()
        .filter(|notif| notif.user_id == user_id && !notif.read)
        .collect()
}

pub fn count_by_kind(notifications: &[&Notification], kind: NotificationKind) -> usize {
    notifications.iter().filter(|notif| notif.kind == kind).count()
}

#[cfg(test)]
mod tests {
    use super::{count_by_kind, notifications_for, unread_for};
    use crate::model::notification::NotificationKind;
    use crate::store::DomainStore;

    fn fixed_now() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn kind_counts_follow_recipient() {
        let store = DomainStore::seeded_with_clock(fixed_now);

        let admin = notifications_for(&store, "1");
        assert_eq!(count_by_kind(&admin, NotificationKind::Warning), 1);
        assert_eq!(count_by_kind(&admin, NotificationKind::Info), 0);

        let user = notifications_for(&store, "3");
        assert_eq!(count_by_kind(&user, NotificationKind::Success), 1);
        assert_eq!(count_by_kind(&user, NotificationKind::Warning), 0);
        assert!(unread_for(&store, "3").is_empty());
    }
}
