use web_sys::DragEvent;
use yew::prelude::*;

use crate::model::{ItemKind, TRAY_PAYLOAD_FORMAT};
use crate::util::cwarn;

// (background, border) per template
fn template_colors(kind: ItemKind) -> (&'static str, &'static str) {
    match kind {
        ItemKind::Pumpkin => ("#ea580c", "#fb923c"),
        _ => ("#9333ea", "#c084fc"),
    }
}

#[function_component(Tray)]
pub fn tray() -> Html {
    let templates = ItemKind::TRAY.into_iter().map(|kind| {
        let ondragstart = Callback::from(move |e: DragEvent| {
            if let Some(dt) = e.data_transfer() {
                if let Err(err) = dt.set_data(TRAY_PAYLOAD_FORMAT, kind.as_str()) {
                    cwarn(&format!("tray drag for {} carries no payload: {:?}", kind.as_str(), err));
                }
                dt.set_effect_allowed("copy");
            }
        });
        let (bg, border) = template_colors(kind);
        let style = format!(
            "width:96px; height:96px; background:{}; border:2px solid {}; border-radius:6px; cursor:move; box-shadow:0 10px 15px rgba(0,0,0,0.4);",
            bg, border
        );
        html! {
            <div key={kind.as_str()} draggable="true" {style} {ondragstart}>
                if let Some(src) = kind.image_src() {
                    <img {src} alt={kind.as_str()} draggable="false" style="width:100%; height:100%; object-fit:contain; border-radius:6px;" />
                }
            </div>
        }
    });
    html! {
        <aside style="width:320px; background:#000; border-left:1px solid #f97316;">
            <div style="padding:16px; border-bottom:1px solid #f97316;">
                <h1 style="margin:0; color:#fb923c; font-weight:600; font-size:18px;">{"InfiniteBrew"}</h1>
            </div>
            <div style="padding:16px; display:flex; gap:12px;">
                { for templates }
            </div>
        </aside>
    }
}
