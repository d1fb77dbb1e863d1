// File: crates/weightplot-core/src/smooth.rs
// Summary: Moving-average recurrences over the weight series, selectable
// between exponential decay and a fixed 10-slot window.

use crate::store::WeightLog;

/// Fraction of each new weight folded into the exponential average.
const DECAY_GAIN: f64 = 0.1;
/// Slot count of the windowed average.
const WINDOW: usize = 10;

/// Which recurrence smooths the series. The two are alternate designs,
/// not complementary: a run uses exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    /// `avg <- avg * 0.9 + weight * 0.1`; history decays geometrically.
    #[default]
    Exponential,
    /// Unweighted mean of the last ten weights, slots preloaded with the
    /// seed, so early averages are pulled toward the seed.
    Windowed,
}

impl Smoothing {
    /// Parse a CLI selector value.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "exponential" => Some(Self::Exponential),
            "window" => Some(Self::Windowed),
            _ => None,
        }
    }
}

/// Recurrence state, advanced once per entry in ascending date order.
#[derive(Clone, Debug)]
pub enum Smoother {
    Exponential { average: f64 },
    Windowed { slots: [f64; WINDOW], cursor: usize },
}

impl Smoother {
    pub fn new(kind: Smoothing, seed: f64) -> Self {
        match kind {
            Smoothing::Exponential => Self::Exponential { average: seed },
            Smoothing::Windowed => Self::Windowed { slots: [seed; WINDOW], cursor: 0 },
        }
    }

    /// Fold one weight into the state and return the new average.
    pub fn push(&mut self, weight: f64) -> f64 {
        match self {
            Self::Exponential { average } => {
                *average = *average * (1.0 - DECAY_GAIN) + weight * DECAY_GAIN;
                *average
            }
            Self::Windowed { slots, cursor } => {
                slots[*cursor] = weight;
                *cursor = (*cursor + 1) % WINDOW;
                slots.iter().sum::<f64>() / WINDOW as f64
            }
        }
    }
}

/// Lazily traverse the log in date order, pairing each entry with its
/// smoothed average. Nothing buffers the output sequence; each triple is
/// produced as the consumer pulls it.
pub fn smoothed(
    log: &WeightLog,
    kind: Smoothing,
) -> impl Iterator<Item = (&str, f64, f64)> {
    let mut smoother = Smoother::new(kind, log.seed_average());
    log.entries().map(move |entry| {
        let average = smoother.push(entry.weight());
        (entry.date(), entry.weight(), average)
    })
}
