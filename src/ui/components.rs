/// Reusable UI components

use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlInputRowProps {
    pub id: Uuid,
    pub value: String,
    pub on_input: Callback<(Uuid, String)>,
    pub on_remove: Callback<Uuid>,
    /// Enter pressed inside the input
    pub on_enter: Callback<()>,
}

#[function_component(UrlInputRow)]
pub fn url_input_row(props: &UrlInputRowProps) -> Html {
    let oninput = {
        let id = props.id;
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit((id, input.value()));
            }
        })
    };

    let onkeydown = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_enter.emit(());
            }
        })
    };

    let onclick = props.on_remove.reform({
        let id = props.id;
        move |_: MouseEvent| id
    });

    html! {
        <div class="input-group">
            <input
                type="url"
                class="url-input"
                placeholder="Cole o link do vídeo aqui (YouTube, Instagram, TikTok, Pinterest)"
                value={props.value.clone()}
                {oninput}
                {onkeydown}
            />
            <button class="btn-remove" aria-label="Remover" {onclick}>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                    <path d="M6 18L18 6M6 6l12 12"/>
                </svg>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let label = match props.theme {
        Theme::Dark => "Mudar para tema claro",
        Theme::Light => "Mudar para tema escuro",
    };

    html! {
        <button class="theme-toggle" aria-label={label} title={label} onclick={props.on_toggle.clone()}>
            if props.theme == Theme::Dark {
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                    <path d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"/>
                </svg>
            } else {
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                    <path d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"/>
                </svg>
            }
        </button>
    }
}
