use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in either detection or display space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair. Used for image, rendered and viewport sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Face bounding box in detection-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRectangle {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

/// The 27 named landmarks reported per face.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmarks {
    pub pupil_left: Point,
    pub pupil_right: Point,
    pub nose_tip: Point,
    pub mouth_left: Point,
    pub mouth_right: Point,
    pub eyebrow_left_outer: Point,
    pub eyebrow_left_inner: Point,
    pub eye_left_outer: Point,
    pub eye_left_top: Point,
    pub eye_left_bottom: Point,
    pub eye_left_inner: Point,
    pub eyebrow_right_inner: Point,
    pub eyebrow_right_outer: Point,
    pub eye_right_inner: Point,
    pub eye_right_top: Point,
    pub eye_right_bottom: Point,
    pub eye_right_outer: Point,
    pub nose_root_left: Point,
    pub nose_root_right: Point,
    pub nose_left_alar_top: Point,
    pub nose_right_alar_top: Point,
    pub nose_left_alar_out_tip: Point,
    pub nose_right_alar_out_tip: Point,
    pub upper_lip_top: Point,
    pub upper_lip_bottom: Point,
    pub under_lip_top: Point,
    pub under_lip_bottom: Point,
}

pub const LANDMARK_COUNT: usize = 27;

impl Landmarks {
    /// All landmarks as `(wire name, point)` pairs, grouped by feature.
    pub fn named_points(&self) -> [(&'static str, Point); LANDMARK_COUNT] {
        [
            ("eyebrowLeftInner", self.eyebrow_left_inner),
            ("eyebrowLeftOuter", self.eyebrow_left_outer),
            ("eyebrowRightInner", self.eyebrow_right_inner),
            ("eyebrowRightOuter", self.eyebrow_right_outer),
            ("eyeLeftBottom", self.eye_left_bottom),
            ("eyeLeftInner", self.eye_left_inner),
            ("eyeLeftOuter", self.eye_left_outer),
            ("eyeLeftTop", self.eye_left_top),
            ("eyeRightBottom", self.eye_right_bottom),
            ("eyeRightInner", self.eye_right_inner),
            ("eyeRightOuter", self.eye_right_outer),
            ("eyeRightTop", self.eye_right_top),
            ("mouthLeft", self.mouth_left),
            ("mouthRight", self.mouth_right),
            ("noseLeftAlarOutTip", self.nose_left_alar_out_tip),
            ("noseLeftAlarTop", self.nose_left_alar_top),
            ("noseRightAlarOutTip", self.nose_right_alar_out_tip),
            ("noseRightAlarTop", self.nose_right_alar_top),
            ("noseRootLeft", self.nose_root_left),
            ("noseRootRight", self.nose_root_right),
            ("noseTip", self.nose_tip),
            ("pupilLeft", self.pupil_left),
            ("pupilRight", self.pupil_right),
            ("underLipBottom", self.under_lip_bottom),
            ("underLipTop", self.under_lip_top),
            ("upperLipBottom", self.upper_lip_bottom),
            ("upperLipTop", self.upper_lip_top),
        ]
    }
}

/// Reported gender. Strings other than "male"/"female" are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Unknown(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unknown(raw),
        }
    }
}

impl From<&str> for Gender {
    fn from(raw: &str) -> Self {
        Gender::from(raw.to_string())
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion categories in canonical order. Ties between equal scores resolve
/// to the variant that comes first here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Contempt,
    Disgust,
    Fear,
    Happiness,
    Neutral,
    Sadness,
    Surprise,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Anger,
        Emotion::Contempt,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happiness,
        Emotion::Neutral,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    /// Wire name, as it appears in the emotion object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Contempt => "contempt",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happiness => "happiness",
            Emotion::Neutral => "neutral",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
        }
    }

    /// Capitalized name for display text.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Contempt => "Contempt",
            Emotion::Disgust => "Disgust",
            Emotion::Fear => "Fear",
            Emotion::Happiness => "Happiness",
            Emotion::Neutral => "Neutral",
            Emotion::Sadness => "Sadness",
            Emotion::Surprise => "Surprise",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Contempt => self.contempt,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Happiness => self.happiness,
            Emotion::Neutral => self.neutral,
            Emotion::Sadness => self.sadness,
            Emotion::Surprise => self.surprise,
        }
    }

    /// Scores in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.score(e)))
    }
}

/// One detected face, as consumed by the overlay engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRecord {
    pub id: String,
    pub rectangle: FaceRectangle,
    pub landmarks: Landmarks,
    pub gender: Gender,
    pub age: f64,
    pub emotion: Option<EmotionScores>,
}
