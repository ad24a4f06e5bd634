/// Result cards for processed videos

use patternfly_yew::prelude::{Button, ButtonVariant};
use yew::prelude::*;

use crate::format::{format_duration, format_timestamp, language_name};
use crate::models::{ResultItem, Segment, VideoFailure, VideoResult};

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    /// Zero-based position in the response
    pub index: usize,
    pub item: ResultItem,
    /// Receives the video id
    pub on_download: Callback<String>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    match &props.item {
        ResultItem::Failure(failure) => render_failure(props.index, failure),
        ResultItem::Success(video) => html! {
            <VideoCard video={video.clone()} on_download={props.on_download.clone()} />
        },
    }
}

fn render_failure(index: usize, failure: &VideoFailure) -> Html {
    html! {
        <div class="result-card error">
            <div class="error-message">
                <strong>{format!("Erro ao processar vídeo {}", index + 1)}</strong>
                <p>{&failure.error}</p>
                <p><small>{format!("URL: {}", failure.url)}</small></p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: VideoResult,
    on_download: Callback<String>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    let on_download = props.on_download.reform({
        let video_id = video.video_id.clone();
        move |_: MouseEvent| video_id.clone()
    });

    html! {
        <div class="result-card">
            <div class="result-header">
                if let Some(thumbnail) = &video.thumbnail {
                    <img src={thumbnail.clone()} alt="Thumbnail" class="thumbnail" />
                }
                <div class="result-info">
                    <h3 class="result-title">{&video.title}</h3>
                    <p class="result-meta">{format!("Duração: {}", format_duration(video.duration))}</p>
                    if let Some(filename) = &video.filename {
                        <p class="result-meta">{format!("Arquivo: {}", filename)}</p>
                    }
                    if let Some(url) = &video.url {
                        <p class="result-meta">
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Ver original"}</a>
                        </p>
                    }
                    <Button onclick={on_download} variant={ButtonVariant::Primary}>
                        <svg class="download-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4"/>
                        </svg>
                        {"Baixar Vídeo"}
                    </Button>
                </div>
            </div>

            <div class="transcription-section">
                <div class="transcription-header">
                    <h3>{"Transcrição"}</h3>
                    <span class="language-badge">{language_name(&video.transcription.language)}</span>
                </div>
                <div class="transcription-text">
                    {&video.transcription.text}
                </div>
                if !video.transcription.segments.is_empty() {
                    <SegmentList segments={video.transcription.segments.clone()} />
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SegmentListProps {
    segments: Vec<Segment>,
}

#[function_component(SegmentList)]
fn segment_list(props: &SegmentListProps) -> Html {
    let expanded = use_state(|| false);

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_| {
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class="segments">
            <Button onclick={toggle_expanded} variant={ButtonVariant::Link}>
                {if *expanded {
                    "Ocultar segmentos".to_string()
                } else {
                    format!("Mostrar segmentos ({})", props.segments.len())
                }}
            </Button>
            if *expanded {
                <ul class="segment-list">
                    {for props.segments.iter().map(|segment| html! {
                        <li class="segment-item">
                            <span class="segment-time">
                                {format!("{} - {}", format_timestamp(segment.start), format_timestamp(segment.end))}
                            </span>
                            <span class="segment-text">{segment.text.trim()}</span>
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}
