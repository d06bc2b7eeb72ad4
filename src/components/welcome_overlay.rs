use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeOverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Open flag after a dismissal. Closed stays closed, so repeated clicks are no-ops.
pub fn dismissed(_open: bool) -> bool {
    false
}

#[function_component(WelcomeOverlay)]
pub fn welcome_overlay(props: &WelcomeOverlayProps) -> Html {
    if !props.open {
        return html! {};
    }
    let start_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; inset:0; background:rgba(0,0,0,0.5); display:flex; align-items:center; justify-content:center; z-index:50;">
            <div style="background:#000; border:1px solid #f97316; padding:32px; border-radius:12px; max-width:448px; width:100%; margin:0 16px;">
                <h2 style="margin:0 0 12px 0; font-size:24px; font-weight:600; color:#fff;">{"Welcome to InfiniteBrew"}</h2>
                <p style="margin:0 0 24px 0; color:#9ca3af; line-height:1.6;">{"Drag objects to brew new objects."}</p>
                <button onclick={start_btn} style="width:100%; background:#ea580c; color:#fff; padding:12px 0; border:none; border-radius:8px; font-weight:500; cursor:pointer;">{"Get Started"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissing_twice_matches_dismissing_once() {
        let once = dismissed(true);
        assert!(!once);
        assert_eq!(dismissed(once), once);
        assert_eq!(dismissed(dismissed(dismissed(true))), once);
    }
}
