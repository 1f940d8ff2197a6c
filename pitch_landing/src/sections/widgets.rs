//! Building blocks shared by the pitch sections: cards, controls and SVG charts.

use jaktlaget_calc::SeriesPoint;
use jaktlaget_calc::calculator::SliderRange;
use jaktlaget_calc::series::{ProfitGroup, max_value};
use leptos::ev;
use leptos::prelude::*;

/// Glass card with an uppercase caption.
#[component]
pub fn Card(
    title: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {class}")>
            <div class="card-title">{title}</div>
            <div class="card-body">{children()}</div>
        </div>
    }
}

/// Toggle button; `active` decides the highlighted state.
#[component]
pub fn OptionButton<F, C>(label: String, active: F, on_click: C) -> impl IntoView
where
    F: Fn() -> bool + Send + Sync + 'static,
    C: Fn(ev::MouseEvent) + Send + Sync + 'static,
{
    view! {
        <button
            class=move || if active() { "opt-btn active" } else { "opt-btn" }
            on:click=on_click
        >
            {label}
        </button>
    }
}

/// Integer range input bound to a signal. Values are kept inside `range`.
#[component]
pub fn Slider(
    label: &'static str,
    range: SliderRange,
    value: ReadSignal<u32>,
    set_value: WriteSignal<u32>,
    #[prop(default = "")] suffix: &'static str,
) -> impl IntoView {
    view! {
        <div class="slider">
            <div class="slider-head">
                <span class="slider-label">{label}</span>
                <span class="slider-value">{move || format!("{}{suffix}", value.get())}</span>
            </div>
            <input
                type="range"
                class="slider-input"
                min=range.min.to_string()
                max=range.max.to_string()
                step="1"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                        set_value.set(range.clamp_count(v));
                    }
                }
            />
            <div class="slider-bounds">
                <span>{format!("{}{suffix}", range.min)}</span>
                <span>{format!("{}{suffix}", range.max)}</span>
            </div>
        </div>
    }
}

/// Label/value row inside a result card.
#[component]
pub fn Metric<V>(label: &'static str, value: V) -> impl IntoView
where
    V: Fn() -> String + Send + Sync + 'static,
{
    view! {
        <div class="metric">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{value}</span>
        </div>
    }
}

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 200.0;
const CHART_BASELINE: f64 = 176.0;
const CHART_TOP: f64 = 24.0;

/// Vertical bar chart over a reactive series.
///
/// Bars are scaled against the largest value; `format_value` renders the
/// figure printed above each bar.
#[component]
pub fn BarChart(
    #[prop(into)] points: Signal<Vec<SeriesPoint>>,
    gradient: &'static str,
    format_value: fn(f64) -> String,
) -> impl IntoView {
    let fill = format!("url(#{gradient})");

    view! {
        <div class="chart">
            <svg viewBox=view_box() class="chart-svg" preserveAspectRatio="none">
                <line x1="0" y1=CHART_BASELINE.to_string() x2=CHART_WIDTH.to_string() y2=CHART_BASELINE.to_string() class="chart-axis" />
                {move || {
                    let points = points.get();
                    let max = max_value(&points);
                    let slot = CHART_WIDTH / points.len().max(1) as f64;
                    let bar_width = slot * 0.5;
                    let fill = fill.clone();
                    points
                        .into_iter()
                        .enumerate()
                        .map(|(i, point)| {
                            let height = bar_height(point.value, max);
                            let x = slot * i as f64 + (slot - bar_width) / 2.0;
                            let center = slot * i as f64 + slot / 2.0;
                            view! {
                                <g>
                                    <rect
                                        x=format!("{x:.1}")
                                        y=format!("{:.1}", CHART_BASELINE - height)
                                        width=format!("{bar_width:.1}")
                                        height=format!("{height:.1}")
                                        rx="6"
                                        fill=fill.clone()
                                    />
                                    <text x=format!("{center:.1}") y=format!("{:.1}", CHART_BASELINE - height - 6.0) class="chart-value" text-anchor="middle">
                                        {format_value(point.value)}
                                    </text>
                                    <text x=format!("{center:.1}") y="194" class="chart-label" text-anchor="middle">
                                        {point.label}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}

fn view_box() -> String {
    format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
}

fn bar_height(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max) * (CHART_BASELINE - CHART_TOP)
}

/// Bar colors per price column in the profit chart.
const GROUP_COLORS: [&str; 3] = ["#10b981", "#059669", "#047857"];

/// Grouped bars, one group per adoption level, with a legend.
#[component]
pub fn GroupedBarChart(groups: Vec<ProfitGroup>, axis_label: &'static str) -> impl IntoView {
    let max = max_value(groups.iter().flat_map(|g| g.bars.iter()));
    let slot = CHART_WIDTH / groups.len().max(1) as f64;
    let legend: Vec<String> = groups
        .first()
        .map(|g| g.bars.iter().map(|b| b.label.clone()).collect())
        .unwrap_or_default();

    let bars = groups
        .into_iter()
        .enumerate()
        .map(|(gi, group)| {
            let bar_width = slot * 0.7 / group.bars.len().max(1) as f64;
            let start = slot * gi as f64 + slot * 0.15;
            let center = slot * gi as f64 + slot / 2.0;
            let rects = group
                .bars
                .iter()
                .enumerate()
                .map(|(bi, bar)| {
                    let height = bar_height(bar.value, max);
                    let color = GROUP_COLORS[bi % GROUP_COLORS.len()];
                    view! {
                        <rect
                            x=format!("{:.1}", start + bar_width * bi as f64)
                            y=format!("{:.1}", CHART_BASELINE - height)
                            width=format!("{:.1}", bar_width - 2.0)
                            height=format!("{height:.1}")
                            rx="3"
                            fill=color
                        />
                    }
                })
                .collect_view();
            view! {
                <g>
                    {rects}
                    <text x=format!("{center:.1}") y="194" class="chart-label" text-anchor="middle">
                        {group.adoption}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart-tall">
            <div class="chart-axis-label">{axis_label}</div>
            <svg viewBox=view_box() class="chart-svg" preserveAspectRatio="none">
                <line x1="0" y1=CHART_BASELINE.to_string() x2=CHART_WIDTH.to_string() y2=CHART_BASELINE.to_string() class="chart-axis" />
                {bars}
            </svg>
            <div class="chart-legend">
                {legend
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let swatch = format!("background: {}", GROUP_COLORS[i % GROUP_COLORS.len()]);
                        view! {
                            <span class="legend-item">
                                <span class="legend-swatch" style=swatch></span>
                                {label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Brand mark: stylised antlers.
#[component]
pub fn AntlersIcon(#[prop(default = "24")] size: &'static str) -> impl IntoView {
    view! {
        <svg viewBox="0 0 64 64" fill="none" width=size height=size class="antlers">
            <path
                d="M16 20c-2 4-6 6-10 6m10-6c-3-3-5-7-5-12m5 12c3-3 9-4 14-2m-14 2c4 4 6 10 6 16m32-16c2 4 6 6 10 6m-10-6c3-3 5-7 5-12m-5 12c-3-3-9-4-14-2m14 2c-4 4-6 10-6 16"
                stroke="url(#brandGradient)"
                stroke-width="2.5"
                stroke-linecap="round"
            />
            <circle cx="32" cy="46" r="3" stroke="url(#brandGradient)" stroke-width="2.5" />
        </svg>
    }
}

const GRADIENT_DEFS: &str = r##"<defs>
<linearGradient id="brandGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#10b981"/><stop offset="100%" stop-color="#059669"/></linearGradient>
<linearGradient id="revenueGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#10b981"/><stop offset="100%" stop-color="#059669"/></linearGradient>
<linearGradient id="adsGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#10b981"/><stop offset="100%" stop-color="#047857"/></linearGradient>
</defs>"##;

/// Gradients referenced by the icon and the charts.
#[component]
pub fn ChartGradients() -> impl IntoView {
    view! { <svg class="gradient-defs" width="0" height="0" inner_html=GRADIENT_DEFS></svg> }
}
