use super::{surface::RootSurface, tray::Tray, welcome_overlay::{WelcomeOverlay, dismissed}};
use crate::config::BrewConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| BrewConfig::load());
    let welcome_open = use_state(|| true);

    let close_welcome = {
        let welcome_open = welcome_open.clone();
        Callback::from(move |_| {
            let next = dismissed(*welcome_open);
            if next != *welcome_open {
                welcome_open.set(next);
            }
        })
    };

    html! {
        <div style="display:flex; min-height:100vh; background:#000; color:#fff; font-family:sans-serif;">
            <RootSurface config={config.clone()} />
            if !*welcome_open {
                <Tray />
            }
            <WelcomeOverlay open={*welcome_open} on_close={close_welcome} />
        </div>
    }
}
