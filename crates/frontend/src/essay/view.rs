//! Essay form - View Component
//!
//! Topic, attachment drop zone, content, model picker and the submit
//! button, plus the result/error panels and the loading overlay.

use super::model::Evaluator;
use super::view_model::EssayFormVm;
use crate::shared::components::ui::{Badge, Button, Input, Select, Textarea};
use crate::shared::components::{Card, LoadingOverlay};
use crate::shared::icons::icon;
use contracts::essay::attachment::accept_attribute;
use contracts::essay::{EvaluationResult, ModelId};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn EssayForm(evaluator: Rc<dyn Evaluator>) -> impl IntoView {
    let vm = EssayFormVm::new();
    let evaluator = StoredValue::new_local(evaluator);

    // Drop late results once the form is gone
    on_cleanup(vm.teardown());

    let run_submit = move || {
        let evaluator = evaluator.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = vm.submit(evaluator.as_ref()).await;
        });
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        run_submit();
    };

    let handle_retry = move |_: ev::MouseEvent| {
        let evaluator = evaluator.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = vm.retry(evaluator.as_ref()).await;
        });
    };

    // Drop zone
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.accept_browser_file(file);
            }
            // Picking the same file again must fire `change`
            input.set_value("");
        }
    };

    let handle_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(true);
    };

    let handle_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);
    };

    let handle_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        vm.drag_active.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => {
                vm.accept_browser_file(file);
            }
            None => log::debug!("Drop event without files"),
        }
    };

    let model_options = Signal::derive(|| {
        ModelId::ALL
            .iter()
            .map(|m| (m.as_str().to_string(), m.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let model_value = Signal::derive(move || {
        vm.model_id
            .get()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    });

    let busy = Signal::derive(move || vm.is_submitting.get());
    let submit_disabled = Signal::derive(move || !vm.submit_enabled());

    view! {
        <Card class="essay-form">
            <div class="essay-form__heading">
                <div class="essay-form__icon">{icon("upload")}</div>
                <h2 class="essay-form__title">"Envie a sua redação"</h2>
            </div>
            <p class="essay-form__subtitle text-muted">
                "Insira o tema da redação e o seu conteúdo nos campos abaixo."
            </p>

            <form class="form" inert=move || busy.get() on:submit=handle_submit>
                <Input
                    id="topic"
                    label="Tema da Redação"
                    placeholder="Insira o tema da redação..."
                    value=vm.topic
                    on_input=Callback::new(move |v: String| vm.set_topic(v))
                    disabled=busy
                />

                <div class="form__group">
                    <span class="form__label">"Imagem da Redação"</span>
                    <div
                        class="dropzone"
                        class:dropzone--active=move || vm.drag_active.get()
                        on:dragenter=handle_drag_over
                        on:dragover=handle_drag_over
                        on:dragleave=handle_drag_leave
                        on:drop=handle_drop
                        on:click=open_picker
                    >
                        <div class="dropzone__icon text-muted">{icon("upload")}</div>
                        <p>"Arraste e solte o seu arquivo aqui"</p>
                        <p class="text-muted">"ou clique para navegar"</p>
                        <p class="text-small text-muted">"Formatos suportados: JPG, PNG, PDF"</p>
                        <p class="text-small text-muted">"Tamanho máximo do arquivo: 10MB"</p>
                        <input
                            node_ref=file_input
                            type="file"
                            class="hidden"
                            accept=accept_attribute()
                            on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
                            on:change=handle_file_select
                        />
                    </div>
                    {move || vm.attachment.get().map(|attachment| view! {
                        <div class="dropzone__file">
                            {icon("file")}
                            <span class="dropzone__file-name">{attachment.file_name.clone()}</span>
                            <span class="text-small text-muted">{attachment.size_label()}</span>
                            <button
                                type="button"
                                class="button button--icon"
                                aria-label="Remover arquivo"
                                disabled=move || busy.get()
                                on:click=move |_| vm.clear_attachment()
                            >
                                {icon("x")}
                            </button>
                        </div>
                    })}
                    {move || vm.attachment_error.get().map(|e| view! {
                        <div class="form__error">{e}</div>
                    })}
                </div>

                <Textarea
                    id="content"
                    label="Conteúdo da Redação"
                    placeholder="Insira o conteúdo da sua redação em formato de texto..."
                    value=vm.content
                    on_input=Callback::new(move |v: String| vm.set_content(v))
                    rows=8
                    disabled=busy
                />

                <Select
                    id="model"
                    label="Modelo de Avaliação"
                    placeholder="Selecione um modelo de IA para avaliação da redação"
                    value=model_value
                    options=model_options
                    on_change=Callback::new(move |v: String| vm.set_model_str(&v))
                    disabled=busy
                />

                <Button button_type="submit" block=true disabled=submit_disabled>
                    {icon("upload")}
                    "Avaliar redação"
                </Button>
            </form>
        </Card>

        {move || vm.result.get().map(|result| view! { <EvaluationPanel result=result /> })}

        {move || vm.error.get().map(|message| view! {
            <Card class="evaluation evaluation--error">
                <div class="evaluation__heading">
                    {icon("alert")}
                    <h3>"Não foi possível avaliar a redação"</h3>
                </div>
                <p>{message}</p>
                <Button variant="secondary" disabled=busy on_click=Callback::new(handle_retry)>
                    "Tentar novamente"
                </Button>
            </Card>
        })}

        <Show when=move || vm.is_submitting.get()>
            <LoadingOverlay />
        </Show>
    }
}

#[component]
#[allow(non_snake_case)]
fn EvaluationPanel(result: EvaluationResult) -> impl IntoView {
    let has_reasoning = !result.reasoning.trim().is_empty();
    let grade = result.grade_label();

    view! {
        <Card class="evaluation" delay_ms=80>
            <div class="evaluation__heading">
                <h3>"Resultado da avaliação"</h3>
                <span class="text-muted">{result.model_id.display_name()}</span>
            </div>
            {match grade {
                Some(label) => view! {
                    <div class="evaluation__grade">
                        <span class="evaluation__grade-value">{label}</span>
                    </div>
                }.into_any(),
                None => view! {
                    <Badge variant="neutral">"Avaliação simulada"</Badge>
                }.into_any(),
            }}
            <p class="evaluation__feedback">{result.feedback.clone()}</p>
            {has_reasoning.then(|| view! {
                <details class="evaluation__reasoning">
                    <summary>"Raciocínio do modelo"</summary>
                    <p>{result.reasoning.clone()}</p>
                </details>
            })}
        </Card>
    }
}
