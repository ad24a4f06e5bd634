/// Main page: URL form, results and theme toggle

use patternfly_yew::prelude::{Button, ButtonVariant};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::notify::{NotificationKind, NotificationQueue};
use crate::theme::{apply_theme, load_theme, persist_theme};
use crate::ui::components::{Spinner, ThemeToggle, UrlInputRow};
use crate::ui::notifications::{NotificationHost, Notifier, notify};
use crate::ui::results::ResultCard;
use crate::ui::state::{FieldAction, FieldsState, ProcessAction, ProcessState};
use crate::validation::{ValidationError, validate_batch};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();

    let theme = {
        let key = config.theme_storage_key.clone();
        let default = config.default_theme;
        use_state(move || load_theme(&key, default))
    };
    let fields = use_reducer(FieldsState::default);
    let notifications = use_reducer(NotificationQueue::new);
    let notifier: Notifier = notifications.dispatcher();
    let process = use_reducer(ProcessState::default);
    let is_cleaning = use_state(|| false);

    let url_list_ref = use_node_ref();
    let results_ref = use_node_ref();
    let previous_field_count = use_mut_ref(|| fields.list.len());

    // Reflect the theme on <html>
    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    // Scroll a newly added field into view
    {
        let url_list_ref = url_list_ref.clone();
        use_effect_with(fields.list.len(), move |count| {
            let grew = *count > *previous_field_count.borrow();
            *previous_field_count.borrow_mut() = *count;

            if grew {
                if let Some(last) = url_list_ref
                    .cast::<Element>()
                    .and_then(|list| list.last_element_child())
                {
                    scroll_into_view(&last, ScrollLogicalPosition::Nearest);
                }
            }
            || ()
        });
    }

    // Scroll to freshly rendered results
    {
        let results_ref = results_ref.clone();
        use_effect_with(process.batch, move |batch| {
            if *batch > 0 {
                if let Some(section) = results_ref.cast::<Element>() {
                    scroll_into_view(&section, ScrollLogicalPosition::Start);
                }
            }
            || ()
        });
    }

    // Removing the last field is refused by the reducer
    {
        let notifier = notifier.clone();
        use_effect_with(fields.rejected_removals, move |rejected| {
            if *rejected > 0 {
                notify(&notifier, NotificationKind::Warning, "Você precisa ter pelo menos um campo de URL");
            }
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let key = config.theme_storage_key.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            persist_theme(&key, next);
            theme.set(next);
        })
    };

    let on_add_field = {
        let fields = fields.dispatcher();
        Callback::from(move |_: ()| fields.dispatch(FieldAction::Add))
    };

    let on_field_input = {
        let fields = fields.dispatcher();
        Callback::from(move |(id, value): (Uuid, String)| fields.dispatch(FieldAction::Set(id, value)))
    };

    let on_remove_field = {
        let fields = fields.dispatcher();
        Callback::from(move |id: Uuid| fields.dispatch(FieldAction::Remove(id)))
    };

    let on_process = {
        let fields = fields.clone();
        let notifier = notifier.clone();
        let process = process.clone();
        let config = config.clone();

        Callback::from(move |_| {
            if process.processing {
                return;
            }

            let urls = match validate_batch(&fields.list.values(), &config.supported_domains) {
                Ok(urls) => urls,
                Err(ValidationError::Empty) => {
                    notify(&notifier, NotificationKind::Error, "Por favor, adicione pelo menos um URL válido");
                    return;
                }
                Err(ValidationError::Unsupported(invalid)) => {
                    log::warn!("Rejected unsupported urls: {:?}", invalid);
                    notify(
                        &notifier,
                        NotificationKind::Error,
                        "Alguns URLs não são válidos. Verifique e tente novamente.",
                    );
                    return;
                }
            };

            process.dispatch(ProcessAction::Start);

            let notifier = notifier.clone();
            let process = process.dispatcher();
            let config = config.clone();

            spawn_local(async move {
                let outcome = match ApiClient::from_window(config) {
                    Ok(api) => api.process_videos(urls).await,
                    Err(e) => Err(e),
                };

                match &outcome {
                    Ok(items) => {
                        let succeeded = items.iter().filter(|item| item.is_success()).count();
                        log::info!("Received {} result(s), {} succeeded", items.len(), succeeded);
                    }
                    Err(e) => {
                        log::error!("Processing failed: {}", e);
                        notify(
                            &notifier,
                            NotificationKind::Error,
                            format!("Erro ao processar vídeos: {}", e.user_message()),
                        );
                    }
                }

                process.dispatch(ProcessAction::Finish(outcome));
            });
        })
    };

    let on_clear = {
        let fields = fields.dispatcher();
        let process = process.dispatcher();
        let notifier = notifier.clone();

        Callback::from(move |_| {
            if !confirm("Tem certeza que deseja limpar todos os campos e resultados?") {
                return;
            }

            fields.dispatch(FieldAction::Reset);
            process.dispatch(ProcessAction::Clear);
            notify(&notifier, NotificationKind::Success, "Campos limpos com sucesso");
        })
    };

    let on_download = {
        let notifier = notifier.clone();
        let config = config.clone();

        Callback::from(move |video_id: String| {
            let target = ApiClient::from_window(config.clone()).and_then(|api| api.download_url(&video_id));

            match target {
                Ok(url) => {
                    log::info!("Downloading {}", url);
                    let navigated = web_sys::window()
                        .map(|w| w.location().set_href(url.as_str()).is_ok())
                        .unwrap_or(false);

                    if navigated {
                        notify(&notifier, NotificationKind::Success, "Download iniciado!");
                    } else {
                        notify(&notifier, NotificationKind::Error, "Não foi possível iniciar o download");
                    }
                }
                Err(e) => {
                    log::error!("Download failed for {}: {}", video_id, e);
                    notify(&notifier, NotificationKind::Error, format!("Erro no download: {}", e.user_message()));
                }
            }
        })
    };

    let on_cleanup = {
        let notifier = notifier.clone();
        let is_cleaning = is_cleaning.clone();
        let config = config.clone();

        Callback::from(move |_| {
            if *is_cleaning || !confirm("Remover todos os arquivos baixados do servidor?") {
                return;
            }

            is_cleaning.set(true);

            let notifier = notifier.clone();
            let is_cleaning = is_cleaning.clone();
            let config = config.clone();

            spawn_local(async move {
                let outcome = match ApiClient::from_window(config) {
                    Ok(api) => api.cleanup().await,
                    Err(e) => Err(e),
                };

                match outcome {
                    Ok(message) => notify(&notifier, NotificationKind::Success, message),
                    Err(e) => {
                        log::error!("Cleanup failed: {}", e);
                        notify(
                            &notifier,
                            NotificationKind::Error,
                            format!("Erro ao limpar arquivos: {}", e.user_message()),
                        );
                    }
                }

                is_cleaning.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <header class="header">
                <h1 class="main-title">{"Video Downloader & Transcriber"}</h1>
                <ThemeToggle theme={*theme} on_toggle={on_toggle_theme} />
            </header>

            <section class="input-section">
                <div id="urlInputs" class="url-inputs" ref={url_list_ref}>
                    {for fields.list.fields().iter().map(|field| html! {
                        <UrlInputRow
                            key={field.id.to_string()}
                            id={field.id}
                            value={field.value.clone()}
                            on_input={on_field_input.clone()}
                            on_remove={on_remove_field.clone()}
                            on_enter={on_add_field.clone()}
                        />
                    })}
                </div>

                <div class="actions">
                    <Button onclick={on_add_field.reform(|_: MouseEvent| ())} variant={ButtonVariant::Secondary}>
                        {"+ Adicionar URL"}
                    </Button>
                    <Button onclick={on_process} disabled={process.processing} variant={ButtonVariant::Primary}>
                        {"Processar Vídeos"}
                    </Button>
                    <Button onclick={on_clear} variant={ButtonVariant::Secondary}>
                        {"Limpar Tudo"}
                    </Button>
                </div>
            </section>

            if process.processing {
                <section class="loading-section">
                    <Spinner message={Some("Processando vídeos... Isso pode levar alguns minutos.".to_string())} />
                </section>
            }

            if let Some(items) = &process.results {
                <section class="results-section" ref={results_ref}>
                    <h2 class="results-title">{"Resultados"}</h2>
                    <div id="results" class="results">
                        {for items.iter().enumerate().map(|(index, item)| html! {
                            <ResultCard
                                key={index}
                                {index}
                                item={item.clone()}
                                on_download={on_download.clone()}
                            />
                        })}
                    </div>
                </section>
            }

            <footer class="footer">
                <Button onclick={on_cleanup} disabled={*is_cleaning} variant={ButtonVariant::Link}>
                    {"Limpar arquivos do servidor"}
                </Button>
            </footer>

            <NotificationHost
                items={notifications.items().to_vec()}
                notifier={notifier}
                lifetime_ms={config.notification_ms}
                exit_ms={config.notification_exit_ms}
            />
        </div>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
