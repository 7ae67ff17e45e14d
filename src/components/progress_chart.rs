//! Progress Chart Component
//!
//! SVG bar chart of the two completed counters.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store;

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 80.0;
const BAR_GAP: f64 = 60.0;

#[component]
pub fn ProgressChart() -> impl IntoView {
    let ctx = use_app();

    let bars = move || {
        let progress = store::progress(&ctx.view);
        let max = f64::from(progress.scale_max());
        progress
            .series()
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let height = f64::from(value) / max * CHART_HEIGHT;
                let x = BAR_GAP / 2.0 + i as f64 * (BAR_WIDTH + BAR_GAP);
                let y = CHART_HEIGHT - height + 20.0;
                view! {
                    <g class=format!("bar bar-{}", i)>
                        <rect x=x y=y width=BAR_WIDTH height=height></rect>
                        <text x={x + BAR_WIDTH / 2.0} y={y - 4.0} text-anchor="middle">{value}</text>
                        <text x={x + BAR_WIDTH / 2.0} y={CHART_HEIGHT + 40.0} text-anchor="middle">{label}</text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="progress-chart">
            <h2>"Progress"</h2>
            <svg viewBox="0 0 280 210" role="img" aria-label="Completed tasks and assignments">
                {bars}
            </svg>
        </div>
    }
}
