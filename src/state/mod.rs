pub mod brewing;
pub mod bubbles;
pub mod drag;

pub use brewing::{BrewPhase, BrewingState, remaining_delay_ms};
pub use bubbles::{BUBBLE_COUNT, Bubble, sample_bubbles};
pub use drag::DragState;
