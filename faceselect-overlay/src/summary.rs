use std::fmt;

use crate::error::{OverlayError, Result};
use crate::face::{Emotion, EmotionScores, FaceRecord, Gender};
use crate::geometry::Region;

/// Derived values shown for the selected face.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub gender: Gender,
    pub age: f64,
    pub emotion: Emotion,
    /// Dominant emotion score as a percentage.
    pub confidence: f64,
    /// Share of the displayed image covered by the face region, as a
    /// percentage truncated to two decimals.
    pub face_area: f64,
}

/// Highest-scoring emotion. Equal scores resolve to the earlier emotion in
/// canonical order.
pub fn dominant_emotion(scores: &EmotionScores) -> (Emotion, f64) {
    scores
        .iter()
        .fold((Emotion::Anger, scores.anger), |best, cur| {
            if cur.1 > best.1 {
                cur
            } else {
                best
            }
        })
}

/// Truncate toward zero, keeping `places` decimals.
pub fn truncate(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).trunc() / factor
}

pub fn summarize(face: &FaceRecord, region: &Region, total_display_area: f64) -> Result<Summary> {
    let scores = face
        .emotion
        .as_ref()
        .ok_or_else(|| OverlayError::EmptyEmotionVector {
            face_id: face.id.clone(),
        })?;
    if !(total_display_area.is_finite() && total_display_area > 0.0) {
        return Err(OverlayError::InvalidSize {
            width: total_display_area,
            height: 1.0,
        });
    }

    let (emotion, score) = dominant_emotion(scores);
    // Multiply before dividing so exact ratios such as 500/200000 stay exact.
    let face_area = region.area() * 100.0 / total_display_area;

    Ok(Summary {
        gender: face.gender.clone(),
        age: face.age,
        emotion,
        confidence: score * 100.0,
        face_area: truncate(face_area, 2),
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gender: {}", self.gender)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(
            f,
            "Most Confident Emotion: {} - {}%",
            self.emotion, self.confidence
        )?;
        write!(f, "% of Face Area to Photo: {}%", self.face_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate(0.2499, 2), 0.24);
        assert_eq!(truncate(0.25, 2), 0.25);
        assert_eq!(truncate(12.3456, 2), 12.34);
        // 0.29 * 100.0 lands just under 29
        assert_eq!(truncate(0.29, 2), 0.28);
        assert_eq!(truncate(0.28999999999999, 2), 0.28);
        assert_eq!(truncate(0.0, 2), 0.0);
    }

    #[test]
    fn dominant_prefers_strictly_greater() {
        let scores = EmotionScores {
            fear: 0.4,
            sadness: 0.4,
            ..Default::default()
        };
        assert_eq!(dominant_emotion(&scores), (Emotion::Fear, 0.4));
    }

    #[test]
    fn all_zero_scores_pick_anger() {
        assert_eq!(
            dominant_emotion(&EmotionScores::default()),
            (Emotion::Anger, 0.0)
        );
    }

    #[test]
    fn display_renders_four_lines() {
        let s = Summary {
            gender: Gender::Female,
            age: 34.0,
            emotion: Emotion::Happiness,
            confidence: 90.0,
            face_area: 0.25,
        };
        assert_eq!(
            s.to_string(),
            "Gender: female\nAge: 34\nMost Confident Emotion: Happiness - 90%\n% of Face Area to Photo: 0.25%"
        );
    }
}
