pub mod error;
pub mod face;
pub mod geometry;
pub mod scene;
pub mod selection;
pub mod summary;

// Face model, geometry and scene types used by the host
pub use error::{OverlayError, Result};
pub use face::{Emotion, EmotionScores, FaceRecord, FaceRectangle, Gender, Landmarks, Point, Size};
pub use geometry::{DisplayGeometry, Region};
pub use scene::OverlayScene;
pub use selection::Selection;
pub use summary::Summary;
