//! Card — panel with the `card-appear` entrance animation from `styles.css`.

use leptos::prelude::*;

/// Bordered panel used for the form and the result/error panels.
///
/// `delay_ms` staggers the entrance animation when several cards appear together.
#[component]
pub fn Card(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class=format!("card {}", class) style=style>
            {children()}
        </div>
    }
}
