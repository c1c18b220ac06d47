//! Threshold tables that bucket a magnitude into a severity tier.

use colored::Color;

/// Ordered `(upper_bound, tier)` pairs plus the tier for anything above them.
///
/// A value falls into the first tier whose bound is strictly greater than the
/// value, so a value sitting exactly on a bound belongs to the next tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable<T> {
    tiers: Vec<(f64, T)>,
    max_tier: T,
}

impl<T: Copy> ThresholdTable<T> {
    /// Bounds must be given in ascending order.
    pub fn new(tiers: Vec<(f64, T)>, max_tier: T) -> Self {
        debug_assert!(
            tiers.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "threshold bounds must be strictly ascending"
        );
        Self { tiers, max_tier }
    }

    pub fn classify(&self, value: f64) -> T {
        self.tiers
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.max_tier)
    }

    /// Iterate `(lower, upper, tier)` bands, starting at zero.
    pub fn bands(&self) -> impl Iterator<Item = (f64, f64, T)> + '_ {
        let lowers = std::iter::once(0.0).chain(self.tiers.iter().map(|(bound, _)| *bound));
        lowers
            .zip(self.tiers.iter())
            .map(|(lower, (upper, tier))| (lower, *upper, *tier))
    }
}

/// Audible alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    Low,
    Medium,
    High,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Low => "low",
            AlertLevel::Medium => "medium",
            AlertLevel::High => "high",
        }
    }
}

/// Acceleration table used to pick the alert sound.
pub fn sound_tiers(medium_threshold: f64, high_threshold: f64) -> ThresholdTable<AlertLevel> {
    ThresholdTable::new(
        vec![
            (medium_threshold, AlertLevel::Low),
            (high_threshold, AlertLevel::Medium),
        ],
        AlertLevel::High,
    )
}

/// Display colours for acceleration (µm/s²).
pub fn acceleration_colors() -> ThresholdTable<Color> {
    ThresholdTable::new(
        vec![
            (350.0, Color::Green),
            (3500.0, Color::Yellow),
            (10000.0, Color::Red),
        ],
        Color::Red,
    )
}

/// Display colours for velocity (µm/s).
pub fn velocity_colors() -> ThresholdTable<Color> {
    ThresholdTable::new(
        vec![
            (0.2, Color::Blue),
            (0.4, Color::Cyan),
            (0.8, Color::BrightGreen),
            (1.5, Color::BrightYellow),
            (4.0, Color::Yellow),
            (12.0, Color::BrightMagenta),
            (30.0, Color::Magenta),
            (60.0, Color::BrightRed),
            (1000.0, Color::Red),
        ],
        Color::Red,
    )
}
