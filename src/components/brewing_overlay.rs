use yew::prelude::*;

use crate::state::{BUBBLE_COUNT, Bubble, sample_bubbles};

const KEYFRAMES: &str = "\
@keyframes brew-rock { 0%, 100% { transform: rotate(-5deg); } 50% { transform: rotate(5deg); } }
@keyframes brew-bubble {
  from { transform: translate(calc(-50% + var(--x0)), -50%) scale(0.3); opacity: 0.7; }
  to { transform: translate(calc(-50% + var(--x1)), calc(-50% + var(--y1))) scale(1); opacity: 0; }
}";

#[derive(Properties, PartialEq, Clone)]
pub struct BrewingOverlayProps {
    /// Id of the brew in flight; `None` hides the overlay.
    pub brew_id: Option<u64>,
}

fn bubble_style(b: &Bubble) -> String {
    format!(
        "position:absolute; left:50%; top:50%; width:{size:.1}px; height:{size:.1}px; border-radius:9999px; \
         background-color:rgba(156,163,175,{alpha:.2}); --x0:{x0:.1}px; --x1:{x1:.1}px; --y1:{y1:.1}px; \
         animation:brew-bubble {dur:.2}s cubic-bezier(0.25,0.1,0.25,1) {delay:.2}s both;",
        size = b.size_px,
        alpha = b.alpha,
        x0 = b.start_x,
        x1 = b.end_x,
        y1 = b.end_y,
        dur = b.duration_s,
        delay = b.delay_s,
    )
}

#[function_component(BrewingOverlay)]
pub fn brewing_overlay(props: &BrewingOverlayProps) -> Html {
    // resampled once per brew so re-renders don't reshuffle the smoke
    let bubbles = use_memo(props.brew_id, |_| sample_bubbles(BUBBLE_COUNT, js_sys::Math::random));
    if props.brew_id.is_none() {
        return html! {};
    }
    html! {
        <div style="position:fixed; inset:0; background:rgba(0,0,0,0.8); display:flex; align-items:center; justify-content:center; z-index:50; pointer-events:none;">
            <style>{ KEYFRAMES }</style>
            <div style="display:flex; flex-direction:column; align-items:center;">
                <div style="position:relative; animation:brew-rock 1s ease-in-out infinite;">
                    <img src="/cauldron.png" alt="cauldron" style="width:288px; height:288px; object-fit:contain;" />
                    <div style="position:absolute; inset:0;">
                        { for bubbles.iter().enumerate().map(|(i, b)| html! { <div key={i} style={bubble_style(b)} /> }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_style_exposes_animation_variables() {
        let b = Bubble { size_px: 20.0, alpha: 0.5, delay_s: 0.25, duration_s: 2.5, start_x: 20.0, end_x: 40.0, end_y: -150.0 };
        let style = bubble_style(&b);
        assert!(style.contains("--x0:20.0px"));
        assert!(style.contains("--y1:-150.0px"));
        assert!(style.contains("animation:brew-bubble 2.50s"));
        assert!(style.contains("rgba(156,163,175,0.50)"));
    }
}
