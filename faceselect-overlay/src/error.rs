use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    #[error("invalid size {width}x{height}: both dimensions must be positive and finite")]
    InvalidSize { width: f64, height: f64 },

    #[error("face index {index} out of range for {count} face(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("face {face_id} has no emotion scores")]
    EmptyEmotionVector { face_id: String },
}

pub type Result<T> = std::result::Result<T, OverlayError>;
