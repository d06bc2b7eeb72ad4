use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};
use yew::prelude::*;

use super::brewing_overlay::BrewingOverlay;
use crate::brew::spawn_brew;
use crate::config::BrewConfig;
use crate::model::{
    DroppedItem, ITEM_SIZE, ItemKind, MOVE_PAYLOAD_FORMAT, SurfaceAction, SurfaceState, TRAY_PAYLOAD_FORMAT,
    find_brew_pair,
};
use crate::util::{clog, cwarn, now_ms, surface_bounds};

#[derive(Properties, PartialEq, Clone)]
pub struct RootSurfaceProps {
    pub config: Rc<BrewConfig>,
}

fn item_style(item: &DroppedItem) -> String {
    let base = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; cursor:move;",
        item.position.x, item.position.y, ITEM_SIZE, ITEM_SIZE
    );
    match item.kind {
        ItemKind::Potion => format!(
            "{} background:#9333ea; border:2px solid #c084fc; border-radius:6px; box-shadow:0 10px 15px rgba(0,0,0,0.4); \
             display:flex; align-items:flex-end; justify-content:center; box-sizing:border-box;",
            base
        ),
        _ => base,
    }
}

#[function_component(RootSurface)]
pub fn root_surface(props: &RootSurfaceProps) -> Html {
    let surface_ref = use_node_ref();
    let state = use_reducer(SurfaceState::default);

    // Proximity scan on every item-list change; skipped while a brew is running
    {
        let state = state.clone();
        let threshold = props.config.proximity_threshold;
        use_effect_with(state.items_version, move |_| {
            if !state.is_brewing() {
                if let Some(pair) = find_brew_pair(&state.items, threshold) {
                    clog("🔮 Combining pumpkin and candy...");
                    state.dispatch(SurfaceAction::BeginBrew(pair));
                }
            }
            || ()
        });
    }

    // One async task per brew id
    {
        let brew_id = state.brewing.as_ref().map(|b| b.brew_id);
        let state = state.clone();
        let config = props.config.clone();
        let surface_ref = surface_ref.clone();
        use_effect_with(brew_id, move |brew_id| {
            if let Some(brew_id) = *brew_id {
                spawn_brew(state, config, surface_ref, brew_id);
            }
            || ()
        });
    }

    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let state = state.clone();
        let surface_ref = surface_ref.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let bounds = surface_bounds(&surface_ref);
            let (client_x, client_y) = (e.client_x() as f64, e.client_y() as f64);
            let dt = e.data_transfer();
            let moving = dt
                .as_ref()
                .and_then(|dt| dt.get_data(MOVE_PAYLOAD_FORMAT).ok())
                .is_some_and(|id| !id.is_empty());
            if moving || state.drag.is_some() {
                state.dispatch(SurfaceAction::DragEnd { client_x, client_y, bounds });
                return;
            }
            let payload = dt
                .and_then(|dt| dt.get_data(TRAY_PAYLOAD_FORMAT).ok())
                .unwrap_or_default();
            let (Some(kind), Some(bounds)) = (ItemKind::from_tray_payload(&payload), bounds) else {
                return;
            };
            state.dispatch(SurfaceAction::DropItem { kind, client_x, client_y, bounds, now_ms: now_ms() });
        })
    };

    let render_item = |item: &DroppedItem| -> Html {
        let ondragstart = {
            let state = state.clone();
            let id = item.id.clone();
            Callback::from(move |e: DragEvent| {
                let Some(el) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                if let Some(dt) = e.data_transfer() {
                    if let Err(err) = dt.clear_data() {
                        cwarn(&format!("could not clear drag data for {}: {:?}", id, err));
                    }
                    if let Err(err) = dt.set_data(MOVE_PAYLOAD_FORMAT, &id) {
                        cwarn(&format!("could not tag drag of {}: {:?}", id, err));
                    }
                    dt.set_effect_allowed("move");
                }
                state.dispatch(SurfaceAction::DragStart {
                    item_id: id.clone(),
                    offset_x: e.client_x() as f64 - rect.left(),
                    offset_y: e.client_y() as f64 - rect.top(),
                });
            })
        };
        // Released outside the surface; a no-op if the surface drop already committed.
        let ondragend = {
            let state = state.clone();
            let surface_ref = surface_ref.clone();
            Callback::from(move |e: DragEvent| {
                state.dispatch(SurfaceAction::DragEnd {
                    client_x: e.client_x() as f64,
                    client_y: e.client_y() as f64,
                    bounds: surface_bounds(&surface_ref),
                });
            })
        };
        let style = item_style(item);
        match item.kind.image_src() {
            Some(src) => html! {
                <img key={item.id.clone()} {src} alt={item.kind.as_str()} draggable="true" {style} {ondragstart} {ondragend} />
            },
            None => html! {
                <div key={item.id.clone()} draggable="true" {style} {ondragstart} {ondragend}>
                    <span style="color:#fff; font-size:12px; font-weight:600; text-align:center; padding:4px; pointer-events:none;">
                        { item.display_name.clone().unwrap_or_default() }
                    </span>
                </div>
            },
        }
    };

    html! {
        <main ref={surface_ref.clone()} style="flex:1; position:relative; overflow:hidden; min-height:100vh;" {ondrop} {ondragover}>
            { for state.items.iter().map(render_item) }
            <BrewingOverlay brew_id={state.brewing.as_ref().map(|b| b.brew_id)} />
        </main>
    }
}
