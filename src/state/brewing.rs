use crate::model::BrewPair;

/// Where an in-flight brew stands. `PendingName` only survives to resolution
/// when naming never reported back; the potion is then skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum BrewPhase {
    PendingName,
    Named(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrewingState {
    /// Increments per brew so late events from an older brew are dropped.
    pub brew_id: u64,
    pub pair: BrewPair,
    pub phase: BrewPhase,
}

impl BrewingState {
    pub fn name(&self) -> Option<&str> {
        match &self.phase {
            BrewPhase::Named(name) => Some(name.as_str()),
            BrewPhase::PendingName => None,
        }
    }
}

/// Time still to wait after naming finished so the overlay shows for the full duration.
pub fn remaining_delay_ms(duration_ms: u32, elapsed_ms: f64) -> u32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return duration_ms;
    }
    let elapsed = elapsed_ms.min(u32::MAX as f64) as u32;
    duration_ms.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_delay_counts_down_from_brew_start() {
        assert_eq!(remaining_delay_ms(4000, 0.0), 4000);
        assert_eq!(remaining_delay_ms(4000, 1250.7), 2750);
        assert_eq!(remaining_delay_ms(4000, 3500.0), 500);
        assert_eq!(remaining_delay_ms(4000, 9000.0), 0);
    }

    #[test]
    fn clock_skew_never_shortens_the_overlay() {
        assert_eq!(remaining_delay_ms(4000, -20.0), 4000);
        assert_eq!(remaining_delay_ms(4000, f64::NAN), 4000);
    }

    #[test]
    fn name_only_once_named() {
        let pair = BrewPair { pumpkin_id: "p".into(), candy_id: "c".into() };
        let mut brewing = BrewingState { brew_id: 1, pair, phase: BrewPhase::PendingName };
        assert_eq!(brewing.name(), None);
        brewing.phase = BrewPhase::Named("Spooky Sweet".into());
        assert_eq!(brewing.name(), Some("Spooky Sweet"));
    }
}
