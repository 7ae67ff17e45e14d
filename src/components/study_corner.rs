//! Study tips and a motivation video

use leptos::prelude::*;
use studydash_core::tips::{motivation_embed_url, study_tip};

#[component]
pub fn StudyCorner() -> impl IntoView {
    let (tip, set_tip) = signal(study_tip(js_sys::Math::random()));
    let video = motivation_embed_url(js_sys::Math::random());

    view! {
        <div class="study-corner">
            <h2>"Study Tip"</h2>
            <p class="study-tip">{move || tip.get()}</p>
            <button on:click=move |_| set_tip.set(study_tip(js_sys::Math::random()))>"Another tip"</button>
            <h2>"Motivation"</h2>
            <iframe
                class="motivation-video"
                src=video
                allow="accelerometer; encrypted-media; picture-in-picture"
                allowfullscreen=true
            ></iframe>
        </div>
    }
}
