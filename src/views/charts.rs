//! Charts Dashboard View
//!
//! The active top-level view: a single canvas chart fed by a compiled-in demo
//! series that keeps extending itself while the page is open. This is a
//! display surface, not a charting engine.

use gloo_timers::callback::Interval;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Series line color (orange, the primary accent)
const SERIES_COLOR: &str = "#FF9800";

/// Spacing between demo points
const POINT_INTERVAL_MS: i64 = 60 * 60 * 1000;

/// Maximum number of points kept in the series
const SERIES_CAPACITY: usize = 48;

/// How often the demo series grows by one point
const TICK_MS: u32 = 2_000;

/// A single point of the demo series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub value: f64,
}

/// Charts dashboard component
#[component]
pub fn Charts() -> impl IntoView {
    let series = create_rw_signal(demo_series());
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &points);
        }
    });

    // One more point per tick, cancelled with the component scope
    let tick = Interval::new(TICK_MS, move || {
        series.update(advance);
    });
    on_cleanup(move || drop(tick));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 px-6 py-4">
                <h1 class="text-xl font-bold">"Chartboard"</h1>
                <p class="text-gray-400 text-sm mt-1">"Demo series, one point per hour"</p>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <canvas
                        node_ref=canvas_ref
                        width="800"
                        height="400"
                        class="w-full h-64 md:h-96 rounded-lg"
                    />

                    <div class="text-sm text-gray-400 mt-4">
                        {move || {
                            let points = series.get();
                            points
                                .last()
                                .map(|point| {
                                    format!("{} points, latest {:.1}", points.len(), point.value)
                                })
                                .unwrap_or_else(|| "No data".to_string())
                        }}
                    </div>
                </section>
            </main>
        </div>
    }
}

/// Build the initial series: the last 24 hours of the demo signal
pub fn demo_series() -> Vec<SeriesPoint> {
    let now = chrono::Utc::now().timestamp_millis();

    (0..24)
        .rev()
        .map(|hours_ago| {
            let timestamp = now - hours_ago * POINT_INTERVAL_MS;
            SeriesPoint {
                timestamp,
                value: demo_value(timestamp),
            }
        })
        .collect()
}

/// Demo signal: a sinusoid with a 24-hour period centered on 5.0
pub fn demo_value(timestamp: i64) -> f64 {
    let hours = timestamp as f64 / POINT_INTERVAL_MS as f64;
    5.0 + 2.0 * (hours * std::f64::consts::PI / 12.0).sin()
}

/// Append the next point, keeping the series bounded
pub fn advance(points: &mut Vec<SeriesPoint>) {
    let timestamp = points
        .last()
        .map(|point| point.timestamp + POINT_INTERVAL_MS)
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    points.push(SeriesPoint {
        timestamp,
        value: demo_value(timestamp),
    });

    if points.len() > SERIES_CAPACITY {
        points.remove(0);
    }
}

/// Draw the series on the canvas
fn draw_series(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Value range with padding
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.value);
        max = max.max(point.value);
    }
    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style_str("#374151"); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style_str("#9ca3af"); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let start = points[0].timestamp;
    let end = points[points.len() - 1].timestamp;
    let span = (end - start).max(1) as f64;

    let x_of = |timestamp: i64| margin_left + ((timestamp - start) as f64 / span) * chart_width;
    let y_of = |value: f64| margin_top + ((max - value) / (max - min)) * chart_height;

    // The series line
    ctx.set_stroke_style_str(SERIES_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_of(point.timestamp);
        let y = y_of(point.value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style_str(SERIES_COLOR);
    for point in points {
        ctx.begin_path();
        let _ = ctx.arc(
            x_of(point.timestamp),
            y_of(point.value),
            3.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // X-axis labels
    ctx.set_fill_style_str("#9ca3af");
    ctx.set_font("12px sans-serif");
    let num_labels = 4;
    for i in 0..=num_labels {
        let timestamp = start + (i * (end - start) / num_labels);
        let label = chrono::DateTime::from_timestamp_millis(timestamp)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_default();
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;
        let _ = ctx.fill_text(&label, x - 15.0, height - 10.0);
    }
}
