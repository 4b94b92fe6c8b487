//! Application Shell View
//!
//! The generic top-level view: a plain greeting page. Not the active default,
//! but kept selectable so the shell can be brought up without the dashboard.

use leptos::*;

/// Generic application shell component
#[component]
pub fn App(
    /// Name to greet; defaults to "world"
    #[prop(optional_no_strip)]
    name: Option<String>,
) -> impl IntoView {
    let name = name.unwrap_or_else(|| "world".to_string());

    view! {
        <main class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <h1 class="text-4xl font-bold">"Hello " {name} "!"</h1>
            <p class="text-gray-400 mt-2">"Chartboard application shell"</p>
        </main>
    }
}
