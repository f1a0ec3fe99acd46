//! Pie Chart Component
//!
//! Completed/remaining pie drawn on an HTML5 Canvas, with hover highlight,
//! a one-line tooltip and a legend row.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use vitals::{slice_at, LegendEntry, PieChartData, Slice};

/// Gap between the pie and the canvas edge, in pixels
const EDGE_PADDING: f64 = 4.0;

/// Pie chart component
#[component]
pub fn PieChart(
    data: PieChartData,
    /// Canvas width and height in pixels
    #[prop(default = 100)]
    size: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal(None::<usize>);
    let slices = store_value(data.slices());
    let legend = data.legend();

    // Redraw when the hovered slice changes
    create_effect(move |_| {
        let hovered = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            slices.with_value(|s| draw_pie(&canvas, s, hovered));
        }
    });

    let radius = size as f64 / 2.0;
    let on_move = move |ev: ev::MouseEvent| {
        let dx = ev.offset_x() as f64 - radius;
        let dy = ev.offset_y() as f64 - radius;
        let hit = slices.with_value(|s| slice_at(s, dx, dy, radius - EDGE_PADDING));
        if hit != hovered.get_untracked() {
            hovered.set(hit);
        }
    };

    let tooltip = move || {
        hovered.get().and_then(|idx| {
            slices.with_value(|s| s.get(idx).map(|slice| format!("{}: {}", slice.label, slice.value)))
        })
    };

    view! {
        <div class="flex flex-col items-center">
            <canvas
                node_ref=canvas_ref
                width=size.to_string()
                height=size.to_string()
                style=format!("width: {}px; height: {}px", size, size)
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
            />
            <span class="h-4 text-xs text-gray-500">{move || tooltip().unwrap_or_default()}</span>
            <ChartLegend entries=legend />
        </div>
    }
}

/// Legend showing slice colors
#[component]
fn ChartLegend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-2 mt-1">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <div class="flex items-center space-x-1">
                            <div
                                class="w-2 h-2 rounded-sm"
                                style=format!("background-color: {}", entry.color)
                            />
                            <span class="text-xs text-gray-600">{entry.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Draw the slices on canvas
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[Slice], hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - EDGE_PADDING;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.is_empty() {
        // Empty ring so the tile keeps its shape
        ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, 0.0, PI * 2.0);
        ctx.stroke();
        return;
    }

    for (idx, slice) in slices.iter().enumerate() {
        let color = if hovered == Some(idx) {
            &slice.hover_color
        } else {
            &slice.color
        };

        ctx.set_fill_style(&color.as_str().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, slice.start_angle, slice.end_angle);
        ctx.close_path();
        ctx.fill();

        // White separator between slices
        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
}
