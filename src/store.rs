//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Group, GroupPayment, Member};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user's email (None = signed out)
    pub user_email: Option<String>,
    /// Groups of the signed-in user
    pub groups: Vec<Group>,
    /// Group currently open in the group view
    pub current_group: Option<Group>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the user's groups, unless `email` has signed out since the fetch began
pub fn store_set_groups(store: &AppStore, email: &str, groups: Vec<Group>) -> bool {
    if store.user_email().with_untracked(|current| current.as_deref() != Some(email)) {
        log::debug!("Dropping groups fetched for signed-out {}", email);
        return false;
    }
    store.groups().set(groups);
    true
}

pub fn store_add_group(store: &AppStore, group: Group) {
    store.groups().write().push(group);
}

/// Open `group`; a late response for some other group is ignored
pub fn store_set_current_group(store: &AppStore, group_id: u32, group: Group) -> bool {
    if group.id != group_id {
        log::debug!("Dropping group {} loaded while group {} is open", group.id, group_id);
        return false;
    }
    store.current_group().set(Some(group));
    true
}

/// Member ids of the open group, empty unless it is `group_id`
pub fn store_member_ids(store: &AppStore, group_id: u32) -> Vec<u32> {
    store.current_group().with_untracked(|current| {
        current
            .as_ref()
            .filter(|g| g.id == group_id)
            .map(|g| g.members.iter().map(|m| m.id).collect())
            .unwrap_or_default()
    })
}

pub fn store_add_member(store: &AppStore, group_id: u32, member: Member) {
    let field = store.current_group();
    let mut current = field.write();
    if let Some(group) = &mut *current {
        if group.id == group_id {
            group.members.push(member);
        }
    }
}

/// Insert or replace a payment in the open group
pub fn store_upsert_payment(store: &AppStore, group_id: u32, payment: GroupPayment) {
    let field = store.current_group();
    let mut current = field.write();
    if let Some(group) = &mut *current {
        if group.id == group_id {
            upsert_payment(group, payment);
        }
    }
}

/// Mark one split of a cached payment paid
pub fn store_mark_split_paid(store: &AppStore, payment_id: u32, member_id: u32) -> bool {
    let field = store.current_group();
    let mut current = field.write();
    match &mut *current {
        Some(group) => mark_split_paid(group, payment_id, member_id),
        None => false,
    }
}

fn upsert_payment(group: &mut Group, payment: GroupPayment) {
    match group.payment_mut(payment.id) {
        Some(existing) => *existing = payment,
        None => group.payments.push(payment),
    }
}

fn mark_split_paid(group: &mut Group, payment_id: u32, member_id: u32) -> bool {
    group
        .payment_mut(payment_id)
        .and_then(|p| p.member_payments.iter_mut().find(|s| s.member_id == member_id))
        .map(|split| split.paid = true)
        .is_some()
}
