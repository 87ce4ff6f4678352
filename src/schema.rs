//! Wire format of the face detection JSON.
//!
//! The attribute blocks the overlay never reads are still modelled field by
//! field so a decoded document re-encodes unchanged.

use anyhow::{Context, Result};
use faceselect_overlay::{EmotionScores, FaceRecord, FaceRectangle, Gender, Landmarks};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub face_id: String,
    pub face_rectangle: FaceRectangle,
    pub face_attributes: FaceAttributes,
    pub face_landmarks: Landmarks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAttributes {
    pub hair: Hair,
    pub smile: f64,
    pub head_pose: HeadPose,
    pub gender: String,
    pub age: f64,
    pub facial_hair: FacialHair,
    pub glasses: String,
    pub makeup: Makeup,
    pub emotion: EmotionScores,
    pub occlusion: Occlusion,
    pub accessories: Vec<Accessory>,
    pub blur: Blur,
    pub exposure: Exposure,
    pub noise: Noise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hair {
    pub bald: f64,
    pub invisible: bool,
    pub hair_color: Vec<HairColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairColor {
    pub color: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacialHair {
    pub moustache: f64,
    pub beard: f64,
    pub sideburns: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Makeup {
    pub eye_makeup: bool,
    pub lip_makeup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occlusion {
    pub forehead_occluded: bool,
    pub eye_occluded: bool,
    pub mouth_occluded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
    pub blur_level: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exposure {
    pub exposure_level: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Noise {
    pub noise_level: String,
    pub value: f64,
}

impl From<&Face> for FaceRecord {
    fn from(face: &Face) -> Self {
        FaceRecord {
            id: face.face_id.clone(),
            rectangle: face.face_rectangle,
            landmarks: face.face_landmarks,
            gender: Gender::from(face.face_attributes.gender.as_str()),
            age: face.face_attributes.age,
            emotion: Some(face.face_attributes.emotion),
        }
    }
}

pub fn decode_faces(data: &[u8]) -> Result<Vec<Face>> {
    serde_json::from_slice(data).context("decoding face list")
}

pub fn encode_faces(faces: &[Face]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(faces).context("encoding face list")
}

pub fn to_records(faces: &[Face]) -> Vec<FaceRecord> {
    faces.iter().map(FaceRecord::from).collect()
}
