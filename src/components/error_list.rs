//! Error List Component
//!
//! Renders the messages of a failed API call.

use leptos::prelude::*;

#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.with(Vec::is_empty)>
            <ul class="error-list" role="alert">
                <For
                    each=move || errors.get().into_iter().enumerate()
                    key=|(i, msg): &(usize, String)| (*i, msg.clone())
                    children=|(_, msg): (usize, String)| view! { <li class="error-item">{msg}</li> }
                />
            </ul>
        </Show>
    }
}
