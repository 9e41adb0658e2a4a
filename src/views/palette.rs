// src/views/palette.rs
//
// Display classification of a snake configuration and its colour pair.
// Each classification maps to two colours: the body colour and the
// alternate banding colour, applied to alternating pieces.

use nannou::prelude::*;

use crate::services::SnakeMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Cyclic,
    Acyclic,
    Invalid,
    Authentic,
}

impl Classification {
    /// Invalid always wins; the authentic palette overrides the
    /// cyclic/acyclic distinction when enabled.
    pub fn from_metrics(metrics: &SnakeMetrics, authentic: bool) -> Self {
        if !metrics.is_legal {
            Classification::Invalid
        } else if authentic {
            Classification::Authentic
        } else if metrics.is_cyclic {
            Classification::Cyclic
        } else {
            Classification::Acyclic
        }
    }

    pub fn colours(self) -> ColourPair {
        match self {
            // cyclic - green
            Classification::Cyclic => ColourPair {
                body: rgb(0.4, 0.8, 0.2),
                band: rgb(1.0, 1.0, 1.0),
            },
            // acyclic - blue
            Classification::Acyclic => ColourPair {
                body: rgb(0.3, 0.1, 0.9),
                band: rgb(1.0, 1.0, 1.0),
            },
            // invalid - grey
            Classification::Invalid => ColourPair {
                body: rgb(0.5, 0.5, 0.5),
                band: rgb(1.0, 1.0, 1.0),
            },
            // authentic - purple and green
            Classification::Authentic => ColourPair {
                body: rgb(0.38, 0.0, 0.55),
                band: rgb(0.0, 0.5, 0.34),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourPair {
    pub body: Rgb<f32>,
    pub band: Rgb<f32>,
}

impl ColourPair {
    /// Component-wise linear blend; `progress` weights toward `next`.
    /// The endpoints settle exactly on the palette entries.
    pub fn blend(prev: Self, next: Self, progress: f32) -> Self {
        if progress <= 0.0 {
            return prev;
        }
        if progress >= 1.0 {
            return next;
        }
        Self {
            body: lerp_rgb(prev.body, next.body, progress),
            band: lerp_rgb(prev.band, next.band, progress),
        }
    }

    /// Alternating banding along the chain: odd pieces take the body
    /// colour, even pieces the band colour.
    pub fn for_node(&self, index: usize) -> Rgb<f32> {
        if index % 2 == 1 {
            self.body
        } else {
            self.band
        }
    }
}

fn lerp_rgb(a: Rgb<f32>, b: Rgb<f32>, t: f32) -> Rgb<f32> {
    rgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(is_legal: bool, is_cyclic: bool) -> SnakeMetrics {
        SnakeMetrics {
            is_legal,
            is_cyclic,
            closing_turn: None,
        }
    }

    #[test]
    fn invalid_wins_over_authentic() {
        let m = metrics(false, true);
        assert_eq!(
            Classification::from_metrics(&m, true),
            Classification::Invalid
        );
        assert_eq!(
            Classification::from_metrics(&m, false),
            Classification::Invalid
        );
    }

    #[test]
    fn authentic_overrides_cyclicity() {
        assert_eq!(
            Classification::from_metrics(&metrics(true, true), true),
            Classification::Authentic
        );
        assert_eq!(
            Classification::from_metrics(&metrics(true, false), true),
            Classification::Authentic
        );
    }

    #[test]
    fn cyclic_and_acyclic() {
        assert_eq!(
            Classification::from_metrics(&metrics(true, true), false),
            Classification::Cyclic
        );
        assert_eq!(
            Classification::from_metrics(&metrics(true, false), false),
            Classification::Acyclic
        );
    }

    #[test]
    fn blend_endpoints_and_midpoint() {
        let prev = Classification::Acyclic.colours();
        let next = Classification::Cyclic.colours();

        assert_eq!(ColourPair::blend(prev, next, 0.0), prev);
        assert_eq!(ColourPair::blend(prev, next, 1.0), next);

        let mid = ColourPair::blend(prev, next, 0.5);
        assert!((mid.body.red - 0.35).abs() < 1e-6);
        assert!((mid.body.green - 0.45).abs() < 1e-6);
    }

    #[test]
    fn banding_alternates() {
        let pair = Classification::Authentic.colours();
        assert_eq!(pair.for_node(0), pair.band);
        assert_eq!(pair.for_node(1), pair.body);
        assert_eq!(pair.for_node(2), pair.band);
    }
}
