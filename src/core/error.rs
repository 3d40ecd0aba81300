//! Fehler-Taxonomie des Resamplers.

/// Höchste erlaubte Schrittanzahl `Länge / Schrittweite` (2^24).
///
/// Darüber kann f32 die Positionen aufeinanderfolgender Schritte nicht mehr
/// unterscheiden.
pub const MAX_EXPECTED_SAMPLES: f32 = 16_777_216.0;

/// Grund, warum eine Eingabe abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidInputReason {
    /// Weniger als zwei Wegpunkte
    TooFewWaypoints { count: usize },
    /// Schrittweite ist nicht positiv oder nicht endlich
    NonPositiveStep { step_size: f32 },
    /// Zwei aufeinanderfolgende Wegpunkte liegen aufeinander (Segment der Länge 0)
    CoincidentWaypoints { index: usize },
    /// Wegpunkt enthält NaN oder Inf
    NonFiniteWaypoint { index: usize },
    /// `Länge / Schrittweite` ist nicht endlich oder übersteigt die f32-Auflösung
    TooManySamples { expected: f32 },
}

impl std::fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewWaypoints { count } => {
                write!(f, "mindestens 2 Wegpunkte erforderlich, gefunden: {count}")
            }
            Self::NonPositiveStep { step_size } => {
                write!(f, "Schrittweite muss positiv sein, ist: {step_size}")
            }
            Self::CoincidentWaypoints { index } => write!(
                f,
                "Wegpunkte {} und {} liegen aufeinander (Segment der Länge 0)",
                index,
                index + 1
            ),
            Self::NonFiniteWaypoint { index } => {
                write!(f, "Wegpunkt {index} enthält keine endliche Position")
            }
            Self::TooManySamples { expected } => write!(
                f,
                "Linie ergibt {} Schritte, erlaubt sind höchstens {}",
                expected, MAX_EXPECTED_SAMPLES
            ),
        }
    }
}

/// Fehler beim Resampling einer Wegpunkt-Linie.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Ungültige Eingabe, es wird keine Teil-Ausgabe erzeugt
    #[error("Ungueltige Eingabe: {0}")]
    InvalidInput(InvalidInputReason),
    /// Der Walk hat das Sample-Budget überschritten, ohne das Linienende zu erreichen
    #[error("Walk divergiert: {emitted} Samples ohne Erreichen des Linienendes")]
    Diverged { emitted: usize },
}

impl ResampleError {
    /// true, wenn der Fehler aus der Eingabe-Validierung stammt.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<InvalidInputReason> for ResampleError {
    fn from(reason: InvalidInputReason) -> Self {
        Self::InvalidInput(reason)
    }
}
