use serde::{Deserialize, Serialize};

/// Betting position of a seat, taken from its index at the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    Middle,
    Late,
    Button,
}

/// Betting tendencies for a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionProfile {
    pub raise_frequency: f64,
    pub bluff_frequency: f64,
    /// Raise sizing range, as a multiple of the pot or of the bet faced
    pub min_raise_multiplier: f64,
    pub max_raise_multiplier: f64,
}

impl Position {
    /// Classifies `seat` at a table of `seats` by its index alone: the last
    /// seat plays as the button, seats 0 and 1 are early and the seat before
    /// the button is late. The dealer's actual seat is not considered.
    pub fn classify(seat: usize, seats: usize) -> Position {
        if seats > 0 && seat == seats - 1 {
            Position::Button
        } else if seat <= 1 {
            Position::Early
        } else if seats >= 2 && seat == seats - 2 {
            Position::Late
        } else {
            Position::Middle
        }
    }

    pub fn profile(self) -> PositionProfile {
        let (raise_frequency, bluff_frequency, min_raise_multiplier, max_raise_multiplier) =
            match self {
                Position::Early => (0.2, 0.1, 2.0, 3.0),
                Position::Middle => (0.3, 0.15, 2.5, 3.5),
                Position::Late => (0.4, 0.2, 3.0, 4.0),
                Position::Button => (0.5, 0.25, 2.5, 4.0),
            };
        PositionProfile {
            raise_frequency,
            bluff_frequency,
            min_raise_multiplier,
            max_raise_multiplier,
        }
    }
}

impl PositionProfile {
    /// Interpolates the sizing range with `roll` in `[0, 1)`.
    pub fn raise_multiplier(&self, roll: f64) -> f64 {
        self.min_raise_multiplier + roll * (self.max_raise_multiplier - self.min_raise_multiplier)
    }
}
