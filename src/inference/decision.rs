use serde::Serialize;

/// The two pistachio varieties the model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "Kirmizi Pistachio")]
    Kirmizi,
    #[serde(rename = "Siirt Pistachio")]
    Siirt,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Kirmizi => "Kirmizi Pistachio",
            Label::Siirt => "Siirt Pistachio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    /// Probability of the winning class, rescaled into [50,100].
    pub confidence: f32,
}

/// Maps the classifier's raw Siirt probability to the winning label and its
/// confidence percentage. A tie at exactly 0.5 resolves to Siirt.
pub fn decide(probability: f32) -> Prediction {
    if probability >= 0.5 {
        Prediction {
            label: Label::Siirt,
            confidence: probability * 100.0,
        }
    } else {
        Prediction {
            label: Label::Kirmizi,
            confidence: (1.0 - probability) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_resolves_to_siirt_at_half_confidence() {
        let p = decide(0.5);
        assert_eq!(p.label, Label::Siirt);
        assert_eq!(p.confidence, 50.0);
    }

    #[test]
    fn certain_kirmizi() {
        let p = decide(0.0);
        assert_eq!(p.label, Label::Kirmizi);
        assert_eq!(p.confidence, 100.0);
    }

    #[test]
    fn certain_siirt() {
        let p = decide(1.0);
        assert_eq!(p.label, Label::Siirt);
        assert_eq!(p.confidence, 100.0);
    }

    #[test]
    fn siirt_confidence_tracks_probability() {
        let p = decide(0.73);
        assert_eq!(p.label, Label::Siirt);
        assert!((p.confidence - 73.0).abs() < 1e-4);
    }

    #[test]
    fn kirmizi_confidence_is_the_complement() {
        let p = decide(0.2);
        assert_eq!(p.label, Label::Kirmizi);
        assert!((p.confidence - 80.0).abs() < 1e-4);
    }

    #[test]
    fn confidence_never_drops_below_fifty() {
        for i in 0..=100 {
            let p = decide(i as f32 / 100.0);
            assert!((50.0..=100.0).contains(&p.confidence), "p={}", i);
        }
    }

    #[test]
    fn labels_serialize_as_display_names() {
        assert_eq!(
            serde_json::to_string(&Label::Kirmizi).unwrap(),
            "\"Kirmizi Pistachio\""
        );
        assert_eq!(
            serde_json::to_string(&Label::Siirt).unwrap(),
            "\"Siirt Pistachio\""
        );
    }
}
