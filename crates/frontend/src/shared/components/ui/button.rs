use leptos::prelude::*;

/// Button component with variants (primary, secondary) and an optional full-width layout
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };
    let block_class = if block { "button--block" } else { "" };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), block_class)
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
