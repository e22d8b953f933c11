use leptos::prelude::*;

/// Pill-shaped label with a leading dot, used for the course tag
#[component]
pub fn Badge(
    /// Badge variant: "primary" (default) or "neutral"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Show the leading status dot
    #[prop(optional)]
    dot: bool,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "neutral" => "badge--neutral",
        _ => "badge--primary",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {dot.then(|| view! { <span class="badge__dot"></span> })}
            {children()}
        </span>
    }
}
