pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page shell: hero header, the page content, then the credits footer.
///
/// ```text
/// +------------------------------------------+
/// |         Header (badge, title, intro)     |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                  Footer                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-main">
                <header::Header />
                {children()}
            </div>
            <footer::Footer />
        </div>
    }
}
