pub mod config;
pub mod schema;
pub mod source;
pub mod storage;

// Scene, geometry and summary API the CLI and tests drive
pub use faceselect_overlay::{
    geometry, scene, selection, summary, OverlayError, OverlayScene, Point, Size, Summary,
};
