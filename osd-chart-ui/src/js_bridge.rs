//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet station map and D3 profile charts are implemented in
//! `assets/js/*.js`, embedded at compile time, evaluated as globals (no ES
//! modules) and exposed via `window.*`. This module provides safe Rust
//! wrappers that serialize specs and call those globals, plus the one
//! JS-to-Rust path: the map's hover callback.

use wasm_bindgen::closure::Closure;

// Embed the chart JS files at compile time
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");
static PROFILE_CHART_JS: &str = include_str!("../assets/js/profile-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OSD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-libraries polling loop.
///
/// The chart JS files define functions like `renderStationMap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once Leaflet and D3 are ready, and
/// then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [STATION_MAP_JS, PROFILE_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__osdChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__osdChartScripts);
                    delete window.__osdChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderStationMap !== 'undefined') window.renderStationMap = renderStationMap;
                    if (typeof destroyStationMap !== 'undefined') window.destroyStationMap = destroyStationMap;
                    if (typeof renderProfileChart !== 'undefined') window.renderProfileChart = renderProfileChart;
                    if (typeof destroyProfileChart !== 'undefined') window.destroyProfileChart = destroyProfileChart;
                    window.__osdChartsReady = true;
                    console.log('OSD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Register the map hover handler: the map JS calls
/// `window.__osdHover(payloadJson)` with the hover-payload contract
/// (`source_file`, `latitude`, `longitude`) for the point under the
/// cursor.
pub fn set_hover_handler<F: FnMut(String) + 'static>(handler: F) {
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    if let Some(window) = web_sys::window() {
        let ok = js_sys::Reflect::set(
            &window,
            &wasm_bindgen::JsValue::from_str("__osdHover"),
            closure.as_ref(),
        );
        if ok.is_err() {
            log::error!("failed to install hover handler");
        }
    }
    // Leak the closure: it must live for the whole session.
    closure.forget();
}

/// Render the Leaflet station map into the given container.
///
/// Uses a polling loop to wait for Leaflet to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_station_map(container_id: &str, spec_json: &str) {
    let escaped_spec = spec_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__osdChartsReady &&
                    typeof window.renderStationMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderStationMap('{container_id}', '{escaped_spec}');
                    }} catch(e) {{ console.error('[OSD] renderStationMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a D3 depth-profile line chart into the given container.
///
/// Uses a polling loop to wait for D3 to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_profile_chart(container_id: &str, spec_json: &str) {
    let escaped_spec = spec_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__osdChartsReady &&
                    typeof window.renderProfileChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderProfileChart('{container_id}', '{escaped_spec}');
                    }} catch(e) {{ console.error('[OSD] renderProfileChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
