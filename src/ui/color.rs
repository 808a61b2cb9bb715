//! Band color derived from the remaining percentage

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color of the unfilled part of the ring
pub const TRACK_COLOR: Color = Color::Rgb(0x49, 0x49, 0x49);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Red,
    Amber,
    Green,
}

impl Band {
    /// Pick the band for `remaining` out of `total`.
    ///
    /// Bands are checked in order and the first match wins, so the amber
    /// range only takes effect from 34 upwards.
    #[allow(clippy::match_overlapping_arm)]
    pub fn for_remaining(remaining_millis: u64, total_millis: u64) -> Self {
        let percent = u128::from(remaining_millis) * 100 / u128::from(total_millis.max(1));
        match percent {
            0..=33 => Band::Red,
            10..=66 => Band::Amber,
            _ => Band::Green,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Band::Red => (0xE3, 0x04, 0x25),
            Band::Amber => (0xFF, 0xBA, 0x53),
            Band::Green => (0x4C, 0xAF, 0x50),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_follow_first_match() {
        assert_eq!(Band::for_remaining(33, 100), Band::Red);
        assert_eq!(Band::for_remaining(10, 100), Band::Red);
        assert_eq!(Band::for_remaining(34, 100), Band::Amber);
        assert_eq!(Band::for_remaining(50, 100), Band::Amber);
        assert_eq!(Band::for_remaining(66, 100), Band::Amber);
        assert_eq!(Band::for_remaining(67, 100), Band::Green);
        assert_eq!(Band::for_remaining(90, 100), Band::Green);
    }

    #[test]
    fn uses_integer_percentage() {
        // 20_399 * 100 / 60_000 == 33
        assert_eq!(Band::for_remaining(20_399, 60_000), Band::Red);
        assert_eq!(Band::for_remaining(20_400, 60_000), Band::Amber);
        assert_eq!(Band::for_remaining(60_000, 60_000), Band::Green);
        assert_eq!(Band::for_remaining(0, 60_000), Band::Red);
    }

    #[test]
    fn huge_durations_do_not_overflow() {
        assert_eq!(Band::for_remaining(u64::MAX, u64::MAX), Band::Green);
        assert_eq!(Band::for_remaining(u64::MAX / 2, u64::MAX), Band::Amber);
        assert_eq!(Band::for_remaining(u64::MAX / 4, u64::MAX), Band::Red);
    }

    #[test]
    fn is_pure() {
        for remaining in (0..=60_000).step_by(1_250) {
            assert_eq!(
                Band::for_remaining(remaining, 60_000),
                Band::for_remaining(remaining, 60_000)
            );
        }
    }

    #[test]
    fn hex_matches_palette() {
        assert_eq!(Band::Red.hex(), "#E30425");
        assert_eq!(Band::Amber.hex(), "#FFBA53");
        assert_eq!(Band::Green.hex(), "#4CAF50");
    }
}
