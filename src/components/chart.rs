//! Equipment distribution chart.
//!
//! Bar chart rendered on an HTML5 Canvas, one bar per equipment type
//! in the order the analysis service reported them.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::expect_upload_state;
use crate::types::Summary;

const BACKGROUND: &str = "#f9f9f9";
const GRID_COLOR: &str = "#d5d8dc";
const AXIS_TEXT: &str = "#566573";

/// Bar chart of the equipment-type distribution.
#[component]
pub fn SafetyChart() -> impl IntoView {
    let state = expect_upload_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new summary arrives.
    create_effect(move |_| {
        let summary = state.summary.get();

        if let (Some(summary), Some(canvas)) = (summary, canvas_ref.get()) {
            draw_bar_chart(&canvas, &summary);
        }
    });

    view! {
        <div class="chart-panel">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="safety-chart"
            />
            <div class="chart-legend">"Equipment Units"</div>
        </div>
    }
}

/// Draw the distribution onto the canvas.
fn draw_bar_chart(canvas: &HtmlCanvasElement, summary: &Summary) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    if summary.type_dist.is_empty() {
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No equipment data", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    let y_max = y_axis_max(summary.type_dist.max_count());

    // Horizontal grid lines and integer y labels
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for i in 0..=GRID_LINES {
        let y = margin_top + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i * y_max) / GRID_LINES;
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&value.to_string(), 5.0, y + 4.0);
    }

    // Bars, in received order, colored by the safety classification
    let (bar_width, gap) = bar_layout(summary.type_dist.len(), chart_width);
    let bar_color = summary.status().bar_color();

    for (idx, (name, count)) in summary.type_dist.iter().enumerate() {
        let x = margin_left + gap + idx as f64 * (bar_width + gap);
        let bar_height = (*count as f64 / y_max as f64) * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(bar_color);
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&count.to_string(), x + bar_width / 2.0 - 6.0, y - 6.0);
        let _ = ctx.fill_text(name, x + bar_width / 2.0 - 15.0, height - 15.0);
    }
}

const GRID_LINES: u64 = 5;

/// Top of the y axis: smallest multiple of [`GRID_LINES`] covering
/// the largest count, so tick labels stay integral.
fn y_axis_max(max_count: u64) -> u64 {
    let max_count = max_count.max(1);
    max_count.div_ceil(GRID_LINES) * GRID_LINES
}

/// Bar width and inter-bar gap for `count` bars across `chart_width`.
fn bar_layout(count: usize, chart_width: f64) -> (f64, f64) {
    let count = count.max(1) as f64;
    // One leading gap plus one gap per bar; gaps are a quarter bar.
    let bar_width = chart_width / (count * 1.25 + 0.25);
    (bar_width, bar_width * 0.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_covers_max_with_integer_ticks() {
        assert_eq!(y_axis_max(0), 5);
        assert_eq!(y_axis_max(2), 5);
        assert_eq!(y_axis_max(5), 5);
        assert_eq!(y_axis_max(6), 10);
        assert_eq!(y_axis_max(23), 25);
        // Every tick value is integral.
        let top = y_axis_max(23);
        assert_eq!(top % GRID_LINES, 0);
    }

    #[test]
    fn bars_fill_chart_width() {
        for count in 1..8 {
            let (bar, gap) = bar_layout(count, 720.0);
            let used = gap + count as f64 * (bar + gap);
            assert!((used - 720.0).abs() < 1e-6, "count={}", count);
            assert!(bar > 0.0 && gap > 0.0);
        }
    }
}
