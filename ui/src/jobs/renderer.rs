//! Handoff to the external chart renderer (Chart.js, loaded by the page).
//!
//! The series is translated into a Chart.js line-chart config; the only
//! parts that cannot travel as JSON — the per-segment color callback and the
//! canvas fill gradient — are attached to the parsed config object before the
//! `Chart` constructor is invoked.

use serde_json::json;

use crate::history::ChartSeries;

/// JSON-expressible part of the renderer config.
pub fn chart_config(series: &ChartSeries) -> serde_json::Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "data": series.durations_ms,
                "fill": true,
                "borderWidth": 2,
                "pointBackgroundColor": series.point_colors,
                "pointBorderColor": series.point_colors,
                "pointRadius": 4,
                "pointHoverRadius": 6,
                "tension": 0.3,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
            },
            "scales": {
                "x": { "display": false, "grid": { "display": false } },
                "y": { "display": false, "grid": { "display": false }, "beginAtZero": true },
            },
        },
    })
}

/// Renders `series` into the canvas with the given element id.
#[cfg(target_arch = "wasm32")]
pub fn render_chart(canvas_id: &str, series: &ChartSeries) -> Result<(), String> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    let window = web_sys::window().ok_or("window unavailable")?;
    let document = window.document().ok_or("document unavailable")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or("canvas missing")?
        .dyn_into()
        .map_err(|_| "canvas cast failed")?;

    let config = js_sys::JSON::parse(&chart_config(series).to_string())
        .map_err(|_| "config serialization failed")?;

    let dataset = dataset_object(&config)?;

    // Segment coloring: Chart.js consults a callback per segment; index into
    // the prepared color array by the segment's first point.
    let segment_colors = js_sys::Array::new();
    for color in &series.segment_colors {
        segment_colors.push(&JsValue::from_str(color));
    }
    let pick_color = Closure::wrap(Box::new(move |ctx: JsValue| -> JsValue {
        let index = js_sys::Reflect::get(&ctx, &JsValue::from_str("p0DataIndex"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
        segment_colors.get(index)
    }) as Box<dyn FnMut(JsValue) -> JsValue>);
    let segment = js_sys::Object::new();
    js_sys::Reflect::set(
        &segment,
        &JsValue::from_str("borderColor"),
        pick_color.as_ref().unchecked_ref(),
    )
    .ok();
    pick_color.forget();
    js_sys::Reflect::set(&dataset, &JsValue::from_str("segment"), &segment).ok();

    // Two-stop vertical fill under the line.
    let context = canvas
        .get_context("2d")
        .map_err(|_| "canvas context unavailable")?
        .ok_or("canvas context missing")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "context cast failed")?;
    let gradient = context.create_linear_gradient(0.0, 0.0, 0.0, canvas.height() as f64);
    gradient
        .add_color_stop(0.0, series.fill_gradient.top)
        .map_err(|_| "bad gradient stop")?;
    gradient
        .add_color_stop(1.0, series.fill_gradient.bottom)
        .map_err(|_| "bad gradient stop")?;
    js_sys::Reflect::set(&dataset, &JsValue::from_str("backgroundColor"), &gradient).ok();

    let constructor: js_sys::Function = js_sys::Reflect::get(&window, &JsValue::from_str("Chart"))
        .map_err(|_| "Chart.js not loaded")?
        .dyn_into()
        .map_err(|_| "Chart global is not a constructor")?;
    let args = js_sys::Array::new();
    args.push(&canvas);
    args.push(&config);
    js_sys::Reflect::construct(&constructor, &args).map_err(|_| "chart construction failed")?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render_chart(_canvas_id: &str, _series: &ChartSeries) -> Result<(), String> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn dataset_object(config: &wasm_bindgen::JsValue) -> Result<js_sys::Object, String> {
    use wasm_bindgen::{JsCast, JsValue};

    let data = js_sys::Reflect::get(config, &JsValue::from_str("data"))
        .map_err(|_| "config missing data")?;
    let datasets: js_sys::Array = js_sys::Reflect::get(&data, &JsValue::from_str("datasets"))
        .map_err(|_| "config missing datasets")?
        .dyn_into()
        .map_err(|_| "datasets is not an array")?;
    datasets
        .get(0)
        .dyn_into()
        .map_err(|_| "dataset is not an object".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{analyze, JobRunRecord, RunStatus};
    use time::{Duration, OffsetDateTime, UtcOffset};

    #[test]
    fn config_carries_series_data_and_point_colors() {
        let base = OffsetDateTime::from_unix_timestamp(1_705_310_000).unwrap();
        let records: Vec<JobRunRecord> = (0..3)
            .map(|i| JobRunRecord {
                run_number: i + 1,
                start_time: base + Duration::minutes(i as i64),
                duration_nanos: 1_000_000 * (i as i64 + 1),
                status: if i == 1 {
                    RunStatus::Failed
                } else {
                    RunStatus::Complete
                },
            })
            .collect();
        let series = crate::history::build(&analyze(&records).unwrap(), UtcOffset::UTC);

        let config = chart_config(&series);
        assert_eq!(config["type"], "line");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["data"].as_array().unwrap().len(), 3);
        assert_eq!(dataset["data"][0], 1.0);
        assert_eq!(
            dataset["pointBackgroundColor"][1],
            crate::core::theme::FAILURE_COLOR
        );
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 3);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }
}
