//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map function lives in `assets/js/vessel-map.js` and is loaded
//! at runtime as a global (no ES modules). Leaflet itself (`window.L`) comes
//! from the page's script tags. Data crosses the boundary as JSON strings.

use sft_view::map::MapProjection;

// Embed the map script at compile time
static VESSEL_MAP_JS: &str = include_str!("../assets/js/vessel-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SFT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the map script once Leaflet is available.
///
/// The script is stored on `window` and evaluated at global scope from the
/// polling callback, so its function declarations are not block-scoped.
pub fn init_map() {
    let store_js = format!("window.__sftMapScript = {};", js_string(VESSEL_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__sftMapReady || window.__sftMapInitializing) return;
            window.__sftMapInitializing = true;
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__sftMapScript);
                    delete window.__sftMapScript;
                    if (typeof renderVesselMap !== 'undefined') window.renderVesselMap = renderVesselMap;
                    if (typeof destroyVesselMap !== 'undefined') window.destroyVesselMap = destroyVesselMap;
                    window.__sftMapReady = true;
                    console.log('SFT map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render markers and center the map.
///
/// Polls until the map script is ready and the container exists.
pub fn render_vessel_map(container_id: &str, projection: &MapProjection) {
    let data_json = match serde_json::to_string(projection) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize map projection: {}", e);
            return;
        }
    };
    let id = js_string(container_id);
    let data = js_string(&data_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sftMapReady &&
                    typeof window.renderVesselMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderVesselMap({id}, {data});
                    }} catch(e) {{ console.error('[SFT] renderVesselMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the map in the given container.
pub fn destroy_vessel_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyVesselMap) window.destroyVesselMap({});",
        js_string(container_id)
    ));
}
