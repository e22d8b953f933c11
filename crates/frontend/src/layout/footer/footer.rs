use leptos::prelude::*;

/// Project authors as (name, GitHub profile)
const AUTHORS: [(&str, &str); 4] = [
    ("Bernardo De Marco Gonçalves", "https://github.com/bernardodemarco"),
    ("Lucas Almeida Lazarini", "https://github.com/lucaslazarinii"),
    ("Pedro Henrique Nascimento Rocha", "https://github.com/devpedrorocha"),
    ("Vitor Matheus Valandro da Rosa", "https://github.com/VitorValandro"),
];

/// Separator placed before the author at `index`: none, ", " or " e "
fn separator(index: usize, total: usize) -> &'static str {
    match index {
        0 => "",
        i if i + 1 == total => " e ",
        _ => ", ",
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <p class="text-muted">
                "Por "
                {AUTHORS
                    .iter()
                    .enumerate()
                    .map(|(i, (name, url))| view! {
                        {separator(i, AUTHORS.len())}
                        <a class="footer__link" href={*url}>{*name}</a>
                    })
                    .collect_view()}
            </p>
        </footer>
    }
}
