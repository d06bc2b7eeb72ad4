// Browser helpers shared by the components. Keep these out of the model so it
// stays testable off-wasm.
use yew::NodeRef;

use crate::model::SurfaceBounds;

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Bounding client rect of the element behind `node`, if it is mounted.
pub fn surface_bounds(node: &NodeRef) -> Option<SurfaceBounds> {
    let el = node.cast::<web_sys::Element>()?;
    let rect = el.get_bounding_client_rect();
    Some(SurfaceBounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}
