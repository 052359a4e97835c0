//! Group List Component
//!
//! The signed-in user's groups, with a form to create one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorList;
use crate::context::use_app_context;
use crate::models::{Group, NewGroup};
use crate::store::{store_add_group, store_set_groups, use_app_store, AppStateStoreFields};

#[component]
pub fn GroupList(email: String, set_open_group: WriteSignal<Option<u32>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let email = StoredValue::new(email);

    let (new_name, set_new_name) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());

    // Load groups on mount and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let email = email.get_value();
        spawn_local(async move {
            match ctx.api().get_user_groups(&email).await {
                Ok(groups) => {
                    log::debug!("Loaded {} groups", groups.len());
                    store_set_groups(&store, &email, groups);
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() { return; }

        spawn_local(async move {
            match ctx.api().make_group(&email.get_value(), &NewGroup { name }).await {
                Ok(group) => {
                    store_add_group(&store, group);
                    set_new_name.set(String::new());
                    set_errors.set(Vec::new());
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    view! {
        <section class="group-list">
            <div class="group-list-header">
                <h2>"Your groups"</h2>
                <button class="refresh-btn" aria-label="refresh" on:click=move |_| ctx.reload()>
                    <span class="material-icons">"refresh"</span>
                </button>
            </div>
            <ErrorList errors=errors />
            <ul>
                <For
                    each=move || store.groups().get()
                    key=|group: &Group| (group.id, group.name.clone())
                    children=move |group: Group| {
                        let id = group.id;
                        view! {
                            <li>
                                <button class="group-link" on:click=move |_| set_open_group.set(Some(id))>
                                    {group.name.clone()}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <form class="group-add-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="New group name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>
        </section>
    }
}
