//! Group View Component
//!
//! Members and payments of one group. Owns the payment popup and supplies
//! its mark-paid and PayPal collaborators.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorList, MarkPaidRequest, PayPalRequest, PaymentPopup};
use crate::context::use_app_context;
use crate::models::{Group, GroupPayment, Member, NewMember};
use crate::paypal;
use crate::splits::{format_amount, split_evenly};
use crate::store::{
    store_add_member, store_mark_split_paid, store_member_ids, store_set_current_group, store_upsert_payment,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn GroupView(group_id: u32, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (errors, set_errors) = signal(Vec::<String>::new());
    let (selected, set_selected) = signal::<Option<GroupPayment>>(None);
    let (member_name, set_member_name) = signal(String::new());
    let (payment_name, set_payment_name) = signal(String::new());
    let (payment_total, set_payment_total) = signal(String::new());

    // Load group on mount and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match ctx.api().get_group(group_id).await {
                Ok(group) => {
                    log::debug!("Loaded group {} with {} payments", group.id, group.payments.len());
                    store_set_current_group(&store, group_id, group);
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    });

    // Fetch a fresh copy before opening; a new value remounts the popup
    let open_payment = move |payment_id: u32| {
        spawn_local(async move {
            match ctx.api().get_payment(group_id, payment_id).await {
                Ok(payment) => {
                    store_upsert_payment(&store, group_id, payment.clone());
                    set_selected.set(Some(payment));
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    let close_popup = Callback::new(move |_: ()| set_selected.set(None));

    let pay_payment = Callback::new(move |req: MarkPaidRequest| {
        log::info!("Marking member {} paid on payment {}", req.member_id, req.payment_id);
        store_mark_split_paid(&store, req.payment_id, req.member_id);
        req.on_done.run(());
    });

    // The split is only marked once the user confirms the PayPal payment went through
    let open_paypal = Callback::new(move |req: PayPalRequest| {
        let url = paypal::checkout_url(&ctx.config().paypal_base, &req.payer.name, req.split.amount);
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
            log::error!("Could not open PayPal window: {:?}", err);
            return;
        }
        let question = format!(
            "Did {} finish paying {} to {}?",
            req.payee.name,
            format_amount(req.split.amount),
            req.payer.name
        );
        if window.confirm_with_message(&question).unwrap_or(false) {
            store_mark_split_paid(&store, req.payment.id, req.split.member_id);
            req.on_done.run(());
        }
    });

    let on_add_member = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = member_name.get().trim().to_string();
        if name.is_empty() { return; }

        spawn_local(async move {
            match ctx.api().add_member(group_id, &NewMember { name }).await {
                Ok(member) => {
                    store_add_member(&store, group_id, member);
                    set_member_name.set(String::new());
                    set_errors.set(Vec::new());
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    let on_add_payment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = payment_name.get().trim().to_string();
        let total = match payment_total.get().trim().parse::<f64>() {
            Ok(total) if total > 0.0 && total.is_finite() => total,
            _ => {
                set_errors.set(vec!["Total amount must be a positive number".to_string()]);
                return;
            }
        };
        if name.is_empty() {
            set_errors.set(vec!["Payment name is required".to_string()]);
            return;
        }
        let member_ids = store_member_ids(&store, group_id);
        if member_ids.is_empty() {
            set_errors.set(vec!["Add members before adding a payment".to_string()]);
            return;
        }
        let splits = split_evenly(total, &member_ids);

        spawn_local(async move {
            match ctx.api().add_payment(group_id, &name, total, splits).await {
                Ok(payment) => {
                    store_upsert_payment(&store, group_id, payment);
                    set_payment_name.set(String::new());
                    set_payment_total.set(String::new());
                    set_errors.set(Vec::new());
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    let group_name = move || {
        store
            .current_group()
            .with(|group| group.as_ref().map(|g| g.name.clone()).unwrap_or_default())
    };
    let members = move || {
        store
            .current_group()
            .with(|group| group.as_ref().map(|g| g.members.clone()).unwrap_or_default())
    };
    let payments = move || {
        store
            .current_group()
            .with(|group| group.as_ref().map(|g| g.payments.clone()).unwrap_or_default())
    };

    view! {
        <section class="group-view">
            <div class="group-header">
                <button class="back-btn" on:click=move |_| on_back.run(())>"← Groups"</button>
                <h2>{group_name}</h2>
                <button class="refresh-btn" aria-label="refresh" on:click=move |_| ctx.reload()>
                    <span class="material-icons">"refresh"</span>
                </button>
            </div>

            <ErrorList errors=errors />

            <h3>"Members"</h3>
            <ul class="member-list">
                <For
                    each=members
                    key=|member: &Member| member.id
                    children=|member: Member| view! { <li class="member-item">{member.name}</li> }
                />
            </ul>
            <form class="member-add-form" on:submit=on_add_member>
                <input
                    type="text"
                    placeholder="Member name"
                    prop:value=move || member_name.get()
                    on:input=move |ev| set_member_name.set(event_target_value(&ev))
                />
                <button type="submit">"Add member"</button>
            </form>

            <h3>"Payments"</h3>
            <ul class="payment-list">
                <For
                    each=payments
                    key=|payment: &GroupPayment| {
                        (payment.id, payment.member_payments.iter().filter(|s| s.paid).count())
                    }
                    children=move |payment: GroupPayment| {
                        let id = payment.id;
                        let settled = payment.member_payments.iter().filter(|s| s.paid).count();
                        let progress = format!("{}/{} paid", settled, payment.member_payments.len());
                        view! {
                            <li>
                                <button class="payment-link" on:click=move |_| open_payment(id)>
                                    <span class="payment-name">{payment.name.clone()}</span>
                                    <span class="payment-total">{format_amount(payment.total_amount)}</span>
                                    <span class="payment-progress">{progress}</span>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <form class="payment-add-form" on:submit=on_add_payment>
                <input
                    type="text"
                    placeholder="What was it for?"
                    prop:value=move || payment_name.get()
                    on:input=move |ev| set_payment_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="Total"
                    prop:value=move || payment_total.get()
                    on:input=move |ev| set_payment_total.set(event_target_value(&ev))
                />
                <button type="submit">"Split evenly"</button>
            </form>

            {move || selected.get().map(|payment| {
                let members = store
                    .current_group()
                    .with_untracked(|group| group.as_ref().map(Group::member_index).unwrap_or_default());
                view! {
                    <PaymentPopup
                        payment=payment
                        members=members
                        on_close=close_popup
                        pay_payment=pay_payment
                        open_paypal=open_paypal
                    />
                }
            })}
        </section>
    }
}
