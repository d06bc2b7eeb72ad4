// Async side of a brew: name first (bounded by the naming timeout), then hold
// the overlay for whatever is left of the brew duration, then resolve.
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::{NodeRef, UseReducerHandle};

use crate::config::BrewConfig;
use crate::model::{SurfaceAction, SurfaceState};
use crate::naming;
use crate::state::remaining_delay_ms;
use crate::util::{clog, now_ms, surface_bounds};

pub fn spawn_brew(state: UseReducerHandle<SurfaceState>, config: Rc<BrewConfig>, surface: NodeRef, brew_id: u64) {
    spawn_local(async move {
        let started = now_ms();
        let name = naming::name_or_fallback(&config).await;
        clog(&format!("brew #{} named: {}", brew_id, name));
        state.dispatch(SurfaceAction::NameResolved { brew_id, name });

        let remaining = remaining_delay_ms(config.brew_duration_ms, now_ms() - started);
        if remaining > 0 {
            TimeoutFuture::new(remaining).await;
        }
        state.dispatch(SurfaceAction::ResolveBrew {
            brew_id,
            bounds: surface_bounds(&surface),
            now_ms: now_ms(),
        });
    });
}
