//! Highcharts Bridge
//!
//! Hands prepared configurations to the page's global `Highcharts` object.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::{ChartError, ChartKind, CHART_DATA_ATTR};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Highcharts, js_name = chart)]
    fn highcharts_chart(render_to: &Element, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Render every chart placeholder on the page.
///
/// Each placeholder is independent: a failure is logged and the remaining
/// placeholders are still rendered. Returns the number of charts drawn.
pub fn render_all() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };

    let mut rendered = 0;
    for kind in ChartKind::ALL {
        let Ok(nodes) = document.query_selector_all(&kind.selector()) else {
            continue;
        };
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            match render_placeholder(kind, &element) {
                Ok(()) => rendered += 1,
                Err(e) => log::error!("[CHART] {:?} placeholder #{}: {}", kind, i, e),
            }
        }
    }
    if rendered > 0 {
        log::debug!("[CHART] rendered {} charts", rendered);
    }
    rendered
}

fn render_placeholder(kind: ChartKind, element: &Element) -> Result<(), ChartError> {
    let raw = element
        .get_attribute(CHART_DATA_ATTR)
        .ok_or(ChartError::MissingData)?;
    let config = kind.prepare(&raw)?;

    // Plain JSON.parse keeps nested maps as ordinary JS objects
    let options = js_sys::JSON::parse(&config.to_string())
        .map_err(|e| ChartError::Js(format!("{:?}", e)))?;
    highcharts_chart(element, &options).map_err(|e| ChartError::Js(format!("{:?}", e)))?;
    Ok(())
}
