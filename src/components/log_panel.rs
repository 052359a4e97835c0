//! Activity Log Panel
//!
//! Collapsible view of the rolling logger's recent lines.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_: web_sys::MouseEvent| {
        if !open.get() {
            set_lines.set(rolling_logger::recent_lines());
        }
        set_open.update(|v| *v = !*v);
    };

    view! {
        <div class="log-panel">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </div>
    }
}
