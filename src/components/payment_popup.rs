//! Payment Popup Component
//!
//! Modal showing a payment's totals and member splits, with a per-split menu
//! to mark it paid or pay it through PayPal.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::{GroupPayment, Member, MemberPayment};
use crate::splits::{format_amount, format_full_date, member_name, SplitAction, SplitRow, SplitState};

/// Sent to the parent when a split is marked paid
#[derive(Clone)]
pub struct MarkPaidRequest {
    pub payment_id: u32,
    pub member_id: u32,
    /// Flips the popup's local paid flag for this split
    pub on_done: Callback<()>,
}

/// Sent to the parent to start an external PayPal payment for a split
#[derive(Clone)]
pub struct PayPalRequest {
    pub payment: GroupPayment,
    pub split: MemberPayment,
    /// Member who made the underlying payment
    pub payer: Member,
    /// Member who owes the split
    pub payee: Member,
    pub on_done: Callback<()>,
}

/// Payment detail dialog
///
/// Split state is copied from `payment` once on mount; the parent remounts the
/// popup to show a different payment.
#[component]
pub fn PaymentPopup(
    payment: GroupPayment,
    members: HashMap<u32, Member>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] pay_payment: Callback<MarkPaidRequest>,
    #[prop(into)] open_paypal: Callback<PayPalRequest>,
) -> impl IntoView {
    let (splits, set_splits) = signal(SplitState::from_payment(&payment));
    let (open_menu, set_open_menu) = signal::<Option<usize>>(None);

    let title = payment.name.clone();
    let total = format_amount(payment.total_amount);
    let created_on = format_full_date(&payment.created_on);
    let payer_name = member_name(&members, payment.member_id);

    let payment = StoredValue::new(payment);
    let members = StoredValue::new(members);

    // Completion handed to the parent; marks only the split at `idx`
    let completion = move |idx: usize| {
        Callback::new(move |_: ()| {
            set_splits.update(|state| {
                state.mark_paid(idx);
            });
        })
    };

    // Resolved against the current split state; None once the split is paid
    let resolve = move |idx: usize| -> Option<SplitAction> {
        splits.with_untracked(|state| {
            payment.with_value(|p| members.with_value(|m| state.action(idx, p, m)))
        })
    };

    let mark_paid = move |idx: usize| {
        set_open_menu.set(None);
        let Some(action) = resolve(idx) else {
            return;
        };
        pay_payment.run(MarkPaidRequest {
            payment_id: action.payment_id,
            member_id: action.split.member_id,
            on_done: completion(action.index),
        });
    };

    let pay_with_paypal = move |idx: usize| {
        set_open_menu.set(None);
        let Some(action) = resolve(idx) else {
            return;
        };
        log::debug!("Opening PayPal for payment {} split {}", action.payment_id, action.split.member_id);
        open_paypal.run(PayPalRequest {
            payment: payment.get_value(),
            split: action.split,
            payer: action.payer,
            payee: action.payee,
            on_done: completion(action.index),
        });
    };

    let toggle_menu = move |idx: usize| {
        set_open_menu.update(|open| *open = if *open == Some(idx) { None } else { Some(idx) });
    };

    let rows = move || splits.with(|state| members.with_value(|m| state.rows(m)));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog payment-popup"
                role="dialog"
                aria-labelledby="payment-popup"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="dialog-title" id="payment-popup">
                    <span class="dialog-caption">"Payment"</span>
                    <span class="dialog-heading">{title}</span>
                    <button class="close-btn" aria-label="close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="dialog-content">
                    <div class="payment-field">
                        <span class="field-caption">"Total amount"</span>
                        <span class="field-value">{total}</span>
                    </div>
                    <div class="payment-field">
                        <span class="field-caption">"Created on"</span>
                        <span class="field-value">{created_on}</span>
                    </div>
                    <div class="payment-field">
                        <span class="field-caption">"Who paid?"</span>
                        <span class="field-value">{payer_name}</span>
                    </div>

                    <div class="split-list">
                        <For
                            each=rows
                            key=|row: &SplitRow| (row.index, row.paid)
                            children=move |row: SplitRow| {
                                let idx = row.index;
                                let member_id = row.member_id;
                                let actionable = row.offers_menu();
                                let icon_style = format!("color: {};", row.icon().color());
                                view! {
                                    <div class="split-card">
                                        <div class="split-info">
                                            <span class="split-member">{row.member_name.clone()}</span>
                                            <span class="split-amount">{format_amount(row.amount)}</span>
                                        </div>
                                        <button
                                            class="paid-btn"
                                            id=format!("paid-button-{}", member_id)
                                            disabled=!actionable
                                            on:click=move |_| {
                                                if actionable {
                                                    toggle_menu(idx);
                                                }
                                            }
                                        >
                                            <span class="material-icons" style=icon_style>"paid"</span>
                                        </button>
                                        <Show when=move || actionable && open_menu.get() == Some(idx)>
                                            <div
                                                class="split-menu"
                                                id=format!("menu-{}", member_id)
                                                aria-labelledby=format!("paid-button-{}", member_id)
                                            >
                                                <button class="menu-item" on:click=move |_| mark_paid(idx)>
                                                    "Mark paid"
                                                </button>
                                                <button class="menu-item" on:click=move |_| pay_with_paypal(idx)>
                                                    "Pay with "
                                                    <span class="material-icons">"paypal"</span>
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="dialog-actions">
                    <button class="exit-btn" on:click=move |_| on_close.run(())>"Exit"</button>
                </div>
            </div>
        </div>
    }
}
