use crate::shared::icons::icon;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

/// Full-screen blocking overlay shown while an evaluation is in flight.
///
/// Mount it conditionally; while mounted it covers the page, takes focus and
/// swallows pointer, keyboard and drag input so nothing underneath can be
/// used. A file dropped on it is discarded instead of opened by the browser.
#[component]
pub fn LoadingOverlay(
    /// Headline, defaults to "Avaliando redação..."
    #[prop(optional, into)]
    message: MaybeProp<String>,
) -> impl IntoView {
    let headline = move || {
        message
            .get()
            .unwrap_or_else(|| "Avaliando redação...".to_string())
    };

    let swallow_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };
    let swallow_key = move |ev: ev::KeyboardEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };
    let swallow_drag = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("none");
        }
    };

    // Pull focus off whatever control was active underneath
    let overlay: NodeRef<html::Div> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(el) = overlay.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div
            class="loading-overlay"
            role="dialog"
            aria-modal="true"
            aria-busy="true"
            aria-live="polite"
            tabindex="-1"
            node_ref=overlay
            on:click=swallow_click
            on:keydown=swallow_key
            on:dragenter=swallow_drag
            on:dragover=swallow_drag
            on:drop=swallow_drag
        >
            <div class="loading-overlay__panel">
                <div class="loading-overlay__spinner">
                    <span class="loading-overlay__ring"></span>
                    {icon("loader")}
                    <span class="loading-overlay__glow"></span>
                </div>
                <div class="loading-overlay__text">
                    <h3>{headline}</h3>
                    <p class="text-muted">"Isso pode levar uns minutos"</p>
                </div>
                <div class="loading-overlay__dots">
                    {(0..3u32)
                        .map(|i| view! {
                            <span
                                class="loading-overlay__dot"
                                style=format!("animation-delay: {}ms;", i * 200)
                            ></span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
