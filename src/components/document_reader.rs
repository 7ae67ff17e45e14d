//! Document Reader Component
//!
//! Previews a local PDF, plain-text or Markdown file and counts the seconds
//! spent on it.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use studydash_core::preview::{DocumentKind, ReadingClock, UNSUPPORTED_MESSAGE};
use wasm_bindgen_futures::JsFuture;

use crate::markdown::parse_markdown;

#[derive(Clone, Debug, PartialEq)]
enum Preview {
    Empty,
    Text(String),
    /// Rendered HTML
    Markdown(String),
    /// Object URL of the file
    Pdf(String),
    Unsupported,
}

async fn read_text(file: &web_sys::File) -> Option<String> {
    match JsFuture::from(file.text()).await {
        Ok(text) => text.as_string(),
        Err(e) => {
            log::error!("Failed to read {}: {:?}", file.name(), e);
            None
        }
    }
}

#[component]
pub fn DocumentReader() -> impl IntoView {
    let preview = RwSignal::new(Preview::Empty);
    let clock = RwSignal::new(ReadingClock::default());

    Interval::new(1_000, move || {
        if preview.with_untracked(|p| *p != Preview::Empty) {
            clock.update(|c| c.tick());
        }
    })
    .forget();

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Preview::Pdf(url) = preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        clock.update(|c| c.restart());

        let kind = DocumentKind::detect(&file.type_(), &file.name());
        log::info!("Opening {} as {:?}", file.name(), kind);
        match kind {
            DocumentKind::Pdf => match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => preview.set(Preview::Pdf(url)),
                Err(e) => {
                    log::error!("Failed to open PDF: {:?}", e);
                    preview.set(Preview::Unsupported);
                }
            },
            DocumentKind::PlainText | DocumentKind::Markdown => {
                spawn_local(async move {
                    let Some(text) = read_text(&file).await else { return };
                    preview.set(if kind == DocumentKind::Markdown {
                        Preview::Markdown(parse_markdown(&text))
                    } else {
                        Preview::Text(text)
                    });
                });
            }
            DocumentKind::Unsupported => preview.set(Preview::Unsupported),
        }
    };

    view! {
        <div class="document-reader">
            <input type="file" accept=".pdf,.txt,.md,.markdown" on:change=on_change />
            <div class="document-view">
                {move || match preview.get() {
                    Preview::Empty => ().into_any(),
                    Preview::Text(text) => view! { <pre class="text-preview">{text}</pre> }.into_any(),
                    Preview::Markdown(html) => view! { <div class="markdown-body" inner_html=html></div> }.into_any(),
                    Preview::Pdf(url) => view! { <iframe class="pdf-preview" src=url></iframe> }.into_any(),
                    Preview::Unsupported => view! { <p>{UNSUPPORTED_MESSAGE}</p> }.into_any(),
                }}
            </div>
            <p class="reading-time">{move || clock.with(|c| c.label())}</p>
        </div>
    }
}
