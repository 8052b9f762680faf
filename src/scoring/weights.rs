//! Scoring weight configuration.

use serde::{Deserialize, Serialize};

/// Weights of the log-linear score combiner.
///
/// An immutable configuration value handed to
/// [`crate::scoring::TrackSetScorer`] at construction. The defaults
/// reproduce the historical tuning: length rewarded, deviation and
/// behind-model occlusion penalized, the remaining terms off.
///
/// Note the sign convention: `geometric_deviation`, `behind_model`,
/// `inside_model` and `motion_smoothness` all weight *subtracted* terms, so
/// a positive `inside_model` weight penalizes inside-model returns even
/// though the aggregate itself is "good" evidence. See
/// [`crate::scoring::scorer::TrackSetScorer::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight on the track-length aggregate (Slen)
    pub track_length: f64,
    /// Weight on the motion-smoothness penalty (Smot)
    pub motion_smoothness: f64,
    /// Weight on the geometric-deviation penalty (Sms1)
    pub geometric_deviation: f64,
    /// Weight on the behind-model penalty (Sms2)
    pub behind_model: f64,
    /// Weight on the inside-model term (Sms3)
    pub inside_model: f64,
    /// Weight on the filter-confidence term (Salb)
    pub filter_confidence: f64,
}

impl ScoringWeights {
    /// Create a builder.
    pub fn builder() -> ScoringWeightsBuilder {
        ScoringWeightsBuilder::default()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            track_length: super::DEFAULT_TRACK_LENGTH_WEIGHT,
            motion_smoothness: super::DEFAULT_MOTION_SMOOTHNESS_WEIGHT,
            geometric_deviation: super::DEFAULT_GEOMETRIC_DEVIATION_WEIGHT,
            behind_model: super::DEFAULT_BEHIND_MODEL_WEIGHT,
            inside_model: super::DEFAULT_INSIDE_MODEL_WEIGHT,
            filter_confidence: super::DEFAULT_FILTER_CONFIDENCE_WEIGHT,
        }
    }
}

/// Builder for [`ScoringWeights`].
#[derive(Debug, Default)]
pub struct ScoringWeightsBuilder {
    track_length: Option<f64>,
    motion_smoothness: Option<f64>,
    geometric_deviation: Option<f64>,
    behind_model: Option<f64>,
    inside_model: Option<f64>,
    filter_confidence: Option<f64>,
}

impl ScoringWeightsBuilder {
    /// Set the track-length weight.
    pub fn track_length(mut self, weight: f64) -> Self {
        self.track_length = Some(weight);
        self
    }

    /// Set the motion-smoothness weight.
    pub fn motion_smoothness(mut self, weight: f64) -> Self {
        self.motion_smoothness = Some(weight);
        self
    }

    /// Set the geometric-deviation weight.
    pub fn geometric_deviation(mut self, weight: f64) -> Self {
        self.geometric_deviation = Some(weight);
        self
    }

    /// Set the behind-model weight.
    pub fn behind_model(mut self, weight: f64) -> Self {
        self.behind_model = Some(weight);
        self
    }

    /// Set the inside-model weight.
    pub fn inside_model(mut self, weight: f64) -> Self {
        self.inside_model = Some(weight);
        self
    }

    /// Set the filter-confidence weight.
    pub fn filter_confidence(mut self, weight: f64) -> Self {
        self.filter_confidence = Some(weight);
        self
    }

    /// Build the weights, defaulting unset fields.
    pub fn build(self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        ScoringWeights {
            track_length: self.track_length.unwrap_or(defaults.track_length),
            motion_smoothness: self
                .motion_smoothness
                .unwrap_or(defaults.motion_smoothness),
            geometric_deviation: self
                .geometric_deviation
                .unwrap_or(defaults.geometric_deviation),
            behind_model: self.behind_model.unwrap_or(defaults.behind_model),
            inside_model: self.inside_model.unwrap_or(defaults.inside_model),
            filter_confidence: self
                .filter_confidence
                .unwrap_or(defaults.filter_confidence),
        }
    }
}
