use crate::shared::components::ui::Badge;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <Badge dot=true>"INE5687 - Projeto em Ciência de Dados"</Badge>
            <h1 class="header__title">
                <span class="header__title-line">"Corretor de Redações"</span>
                <span class="header__title-line header__title-line--accent">"ENEM"</span>
            </h1>
            <p class="header__intro text-muted">
                "Obtenha feedback de suas redações do ENEM. Preencha o tema da redação, insira o seu conteúdo e selecione o modelo para avaliação."
            </p>
        </header>
    }
}
