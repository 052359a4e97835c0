//! Profile Form Component
//!
//! Shows the signed-in user's details and patches name, phone or password.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorList;
use crate::context::use_app_context;
use crate::models::UserPatch;

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn ProfileForm(email: String) -> impl IntoView {
    let ctx = use_app_context();
    let email = StoredValue::new(email);

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (saved, set_saved) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());

    // Load current values on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().get_user(&email.get_value()).await {
                Ok(user) => {
                    set_name.set(user.name);
                    set_phone.set(user.phone_number.unwrap_or_default());
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saved.set(false);
        let patch = UserPatch {
            name: non_empty(name.get()),
            phone_number: non_empty(phone.get()),
            password: non_empty(password.get()),
        };

        spawn_local(async move {
            match ctx.api().patch_user(&email.get_value(), &patch).await {
                Ok(user) => {
                    log::info!("Updated profile for {}", user.email);
                    set_name.set(user.name);
                    set_password.set(String::new());
                    set_errors.set(Vec::new());
                    set_saved.set(true);
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    view! {
        <details class="profile-form">
            <summary>"Profile"</summary>
            <form on:submit=on_save>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="Phone number"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <ErrorList errors=errors />
                <Show when=move || saved.get()>
                    <span class="saved-note">"Saved"</span>
                </Show>
                <button type="submit">"Save"</button>
            </form>
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims_and_drops_blank() {
        assert_eq!(non_empty("  Ada ".to_string()), Some("Ada".to_string()));
        assert_eq!(non_empty("   ".to_string()), None);
    }
}
