//! Payment Split Utilities
//!
//! View state and formatting for a payment's member splits. Kept free of
//! Leptos so it can be tested natively.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{GroupPayment, Member, MemberPayment};

/// Shown for a split whose member is not in the group's member map
pub const UNKNOWN_MEMBER: &str = "Unknown member";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidIcon {
    Green,
    Red,
}

impl PaidIcon {
    pub fn color(self) -> &'static str {
        match self {
            PaidIcon::Green => "green",
            PaidIcon::Red => "red",
        }
    }
}

/// One rendered split row
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRow {
    pub index: usize,
    pub member_id: u32,
    pub member_name: String,
    pub amount: f64,
    pub paid: bool,
}

impl SplitRow {
    pub fn icon(&self) -> PaidIcon {
        if self.paid {
            PaidIcon::Green
        } else {
            PaidIcon::Red
        }
    }

    /// Only unpaid splits get the mark-paid / PayPal menu
    pub fn offers_menu(&self) -> bool {
        !self.paid
    }
}

/// An unpaid split picked from the popup menu, resolved against its payment
#[derive(Debug, Clone, PartialEq)]
pub struct SplitAction {
    /// Position of the split; the completion callback flips this index
    pub index: usize,
    pub payment_id: u32,
    pub split: MemberPayment,
    /// Member who made the underlying payment
    pub payer: Member,
    /// Member who owes the split
    pub payee: Member,
}

/// Local copy of a payment's splits, taken once when the popup mounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitState {
    splits: Vec<MemberPayment>,
}

impl SplitState {
    pub fn from_payment(payment: &GroupPayment) -> Self {
        Self {
            splits: payment.member_payments.clone(),
        }
    }

    pub fn get(&self, idx: usize) -> Option<&MemberPayment> {
        self.splits.get(idx)
    }

    pub fn is_actionable(&self, idx: usize) -> bool {
        self.splits.get(idx).is_some_and(|split| !split.paid)
    }

    /// Flip the split at `idx` to paid. Returns false if nothing changed.
    pub fn mark_paid(&mut self, idx: usize) -> bool {
        match self.splits.get_mut(idx) {
            Some(split) if !split.paid => {
                split.paid = true;
                true
            }
            _ => false,
        }
    }

    /// Resolve the split at `idx` for mark-paid or PayPal; paid splits yield nothing
    pub fn action(&self, idx: usize, payment: &GroupPayment, members: &HashMap<u32, Member>) -> Option<SplitAction> {
        let split = self.splits.get(idx).filter(|split| !split.paid)?;
        Some(SplitAction {
            index: idx,
            payment_id: payment.id,
            split: split.clone(),
            payer: member_or_unknown(members, payment.member_id),
            payee: member_or_unknown(members, split.member_id),
        })
    }

    pub fn rows(&self, members: &HashMap<u32, Member>) -> Vec<SplitRow> {
        self.splits
            .iter()
            .enumerate()
            .map(|(index, split)| SplitRow {
                index,
                member_id: split.member_id,
                member_name: member_name(members, split.member_id),
                amount: split.amount,
                paid: split.paid,
            })
            .collect()
    }
}

pub fn member_name(members: &HashMap<u32, Member>, member_id: u32) -> String {
    members
        .get(&member_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
}

pub fn member_or_unknown(members: &HashMap<u32, Member>, id: u32) -> Member {
    members.get(&id).cloned().unwrap_or_else(|| Member {
        id,
        name: UNKNOWN_MEMBER.to_string(),
    })
}

/// `$60` for whole amounts, `$12.50` otherwise
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// e.g. `Tuesday, June 9, 2026`
pub fn format_full_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Split `total` evenly across members to the cent
///
/// Leftover cents go to the first members in order.
pub fn split_evenly(total: f64, member_ids: &[u32]) -> Vec<MemberPayment> {
    if member_ids.is_empty() {
        return Vec::new();
    }
    let cents = (total * 100.0).round() as i64;
    let count = member_ids.len() as i64;
    let base = cents / count;
    let remainder = cents % count;

    member_ids
        .iter()
        .enumerate()
        .map(|(i, &member_id)| {
            let share = base + i64::from((i as i64) < remainder);
            MemberPayment {
                member_id,
                amount: share as f64 / 100.0,
                paid: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn members() -> HashMap<u32, Member> {
        [(1, "Ada"), (2, "Bo"), (3, "Cy")]
            .into_iter()
            .map(|(id, name)| (id, Member { id, name: name.to_string() }))
            .collect()
    }

    fn payment(splits: Vec<MemberPayment>) -> GroupPayment {
        GroupPayment {
            id: 7,
            name: "Groceries".to_string(),
            total_amount: 100.0,
            created_on: Utc.with_ymd_and_hms(2026, 6, 9, 18, 30, 0).unwrap(),
            member_id: 1,
            member_payments: splits,
        }
    }

    fn split(member_id: u32, amount: f64, paid: bool) -> MemberPayment {
        MemberPayment { member_id, amount, paid }
    }

    #[test]
    fn test_rows_for_mixed_payment() {
        let state = SplitState::from_payment(&payment(vec![split(2, 60.0, false), split(3, 40.0, true)]));
        let rows = state.rows(&members());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].member_name, "Bo");
        assert_eq!(rows[0].icon(), PaidIcon::Red);
        assert!(rows[0].offers_menu());
        assert_eq!(rows[1].member_name, "Cy");
        assert_eq!(rows[1].icon().color(), "green");
        assert!(!rows[1].offers_menu());
    }

    #[test]
    fn test_mark_paid_touches_only_that_index() {
        let mut state = SplitState::from_payment(&payment(vec![
            split(1, 30.0, false),
            split(2, 30.0, false),
            split(3, 40.0, false),
        ]));

        assert!(state.mark_paid(1));

        let paid: Vec<bool> = state.rows(&members()).iter().map(|row| row.paid).collect();
        assert_eq!(paid, vec![false, true, false]);
        assert!(!state.is_actionable(1));
        assert!(state.is_actionable(0));
        assert!(!state.mark_paid(1));
    }

    #[test]
    fn test_mark_paid_out_of_range_is_noop() {
        let mut state = SplitState::from_payment(&payment(vec![split(2, 100.0, false)]));
        let before = state.clone();
        assert!(!state.mark_paid(5));
        assert_eq!(state, before);
        assert!(!state.is_actionable(5));
    }

    #[test]
    fn test_unknown_member_does_not_fail() {
        let state = SplitState::from_payment(&payment(vec![split(99, 10.0, false)]));
        assert_eq!(state.rows(&members())[0].member_name, UNKNOWN_MEMBER);
    }

    #[test]
    fn test_action_names_payer_and_payee() {
        let state = SplitState::from_payment(&payment(vec![split(2, 60.0, false), split(3, 40.0, true)]));
        let action = state.action(0, &payment(vec![]), &members()).unwrap();

        assert_eq!(action.index, 0);
        assert_eq!(action.payment_id, 7);
        assert_eq!(action.split, split(2, 60.0, false));
        assert_eq!(action.payer.name, "Ada");
        assert_eq!(action.payee.name, "Bo");
    }

    #[test]
    fn test_action_skips_paid_and_missing_splits() {
        let state = SplitState::from_payment(&payment(vec![split(2, 60.0, false), split(3, 40.0, true)]));
        assert_eq!(state.action(1, &payment(vec![]), &members()), None);
        assert_eq!(state.action(2, &payment(vec![]), &members()), None);
    }

    #[test]
    fn test_action_index_completes_its_own_split() {
        let mut state = SplitState::from_payment(&payment(vec![split(2, 60.0, false), split(3, 40.0, false)]));
        let action = state.action(1, &payment(vec![]), &members()).unwrap();

        assert!(state.mark_paid(action.index));
        let icons: Vec<(&str, bool)> = state
            .rows(&members())
            .iter()
            .map(|row| (row.icon().color(), row.offers_menu()))
            .collect();
        assert_eq!(icons, vec![("red", true), ("green", false)]);
        assert_eq!(state.action(1, &payment(vec![]), &members()), None);
    }

    #[test]
    fn test_action_with_unknown_payee() {
        let state = SplitState::from_payment(&payment(vec![split(99, 10.0, false)]));
        let action = state.action(0, &payment(vec![]), &members()).unwrap();
        assert_eq!(action.payee, Member { id: 99, name: UNKNOWN_MEMBER.to_string() });
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(60.0), "$60");
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(33.333), "$33.33");
    }

    #[test]
    fn test_format_full_date() {
        let date = Utc.with_ymd_and_hms(2026, 6, 9, 18, 30, 0).unwrap();
        assert_eq!(format_full_date(&date), "Tuesday, June 9, 2026");
    }

    #[test]
    fn test_split_evenly_is_cent_exact() {
        let splits = split_evenly(100.0, &[1, 2, 3]);
        let amounts: Vec<f64> = splits.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![33.34, 33.33, 33.33]);

        let total_cents: i64 = splits.iter().map(|s| (s.amount * 100.0).round() as i64).sum();
        assert_eq!(total_cents, 10000);
        assert!(splits.iter().all(|s| !s.paid));
    }

    #[test]
    fn test_split_evenly_without_members() {
        assert!(split_evenly(50.0, &[]).is_empty());
    }
}
