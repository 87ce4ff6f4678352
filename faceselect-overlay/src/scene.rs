use log::debug;

use crate::error::{OverlayError, Result};
use crate::face::{FaceRecord, Gender, Point, Size};
use crate::geometry::{self, DisplayGeometry, Region};
use crate::selection::Selection;
use crate::summary::{self, Summary};

pub const BORDER_WIDTH: f64 = 2.0;
pub const SELECTED_BORDER_WIDTH: f64 = 5.0;
pub const LANDMARK_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xFF);
    pub const PINK: Rgb = Rgb(0xE0, 0x00, 0x77);
    pub const GREEN: Rgb = Rgb(0x00, 0xFF, 0x00);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub color: Rgb,
    pub border_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledRegion {
    pub index: usize,
    pub region: Region,
    pub style: RegionStyle,
}

/// Face list, image size and selection for one photo.
///
/// Faces and image size may arrive in either order; regions exist only once
/// both are known. Every method that fails leaves the scene as it was.
#[derive(Debug, Default)]
pub struct OverlayScene {
    viewport_width: Option<f64>,
    image_size: Option<Size>,
    faces: Option<Vec<FaceRecord>>,
    geometry: Option<DisplayGeometry>,
    regions: Vec<Region>,
    selection: Selection,
    landmarks: Vec<Point>,
}

impl OverlayScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_width(width: f64) -> Result<Self> {
        let mut scene = Self::new();
        scene.set_viewport_width(width)?;
        Ok(scene)
    }

    pub fn set_viewport_width(&mut self, width: f64) -> Result<()> {
        if !(width.is_finite() && width > 0.0) {
            return Err(OverlayError::InvalidSize { width, height: 0.0 });
        }
        let geometry = self
            .image_size
            .map(|image| Self::geometry_for(image, Some(width)))
            .transpose()?;
        self.viewport_width = Some(width);
        if geometry.is_some() {
            self.geometry = geometry;
            self.rebuild();
        }
        Ok(())
    }

    pub fn set_image_size(&mut self, size: Size) -> Result<()> {
        let geometry = Self::geometry_for(size, self.viewport_width)?;
        self.image_size = Some(size);
        self.geometry = Some(geometry);
        self.rebuild();
        Ok(())
    }

    /// Replace the face list. Any selection is dropped.
    pub fn set_faces(&mut self, faces: Vec<FaceRecord>) {
        self.selection.reset(faces.len());
        self.faces = Some(faces);
        self.rebuild();
    }

    pub fn is_ready(&self) -> bool {
        self.geometry.is_some() && self.faces.is_some()
    }

    pub fn faces(&self) -> &[FaceRecord] {
        self.faces.as_deref().unwrap_or(&[])
    }

    pub fn geometry(&self) -> Option<&DisplayGeometry> {
        self.geometry.as_ref()
    }

    pub fn rendered_size(&self) -> Option<Size> {
        self.geometry.map(|g| g.rendered)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.current()
    }

    pub fn regions(&self) -> Vec<StyledRegion> {
        let selected = self.selection.current();
        self.regions
            .iter()
            .zip(self.faces())
            .enumerate()
            .map(|(index, (region, face))| StyledRegion {
                index,
                region: *region,
                style: RegionStyle {
                    color: match face.gender {
                        Gender::Male => Rgb::BLUE,
                        _ => Rgb::PINK,
                    },
                    border_width: if selected == Some(index) {
                        SELECTED_BORDER_WIDTH
                    } else {
                        BORDER_WIDTH
                    },
                },
            })
            .collect()
    }

    /// Landmark markers for the selected face, in display space.
    pub fn landmarks(&self) -> &[Point] {
        &self.landmarks
    }

    /// Index of the topmost region under `p`. Later regions are drawn above
    /// earlier ones.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.regions.iter().rposition(|r| r.contains(p))
    }

    /// Handle a tap at a display-space point. A tap on a face toggles it, a
    /// tap anywhere else clears the selection.
    pub fn tap(&mut self, p: Point) -> Result<Option<usize>> {
        match self.hit_test(p) {
            Some(index) => self.select(index),
            None => Ok(self.clear()),
        }
    }

    pub fn select(&mut self, index: usize) -> Result<Option<usize>> {
        let selected = self.selection.toggle(index)?;
        self.rebuild_landmarks();
        Ok(selected)
    }

    pub fn clear(&mut self) -> Option<usize> {
        self.selection.clear();
        self.landmarks.clear();
        None
    }

    /// Summary for the selected face. `None` when nothing is selected or the
    /// image has not arrived yet.
    pub fn summary(&self) -> Result<Option<Summary>> {
        match self.selection.current() {
            Some(index) => self.summary_for(index),
            None => Ok(None),
        }
    }

    /// Summary for any face in the list, `None` until regions exist.
    pub fn summary_for(&self, index: usize) -> Result<Option<Summary>> {
        let Some(face) = self.faces().get(index) else {
            return Err(OverlayError::IndexOutOfRange {
                index,
                count: self.faces().len(),
            });
        };
        let (Some(region), Some(geometry)) = (self.regions.get(index), self.geometry.as_ref())
        else {
            return Ok(None);
        };
        summary::summarize(face, region, geometry.rendered.area()).map(Some)
    }

    fn geometry_for(image: Size, viewport_width: Option<f64>) -> Result<DisplayGeometry> {
        let rendered = match viewport_width {
            Some(width) => geometry::fit_to_viewport(image, width)?,
            None => image,
        };
        geometry::compute_geometry(image, rendered)
    }

    fn rebuild(&mut self) {
        self.regions = match (&self.geometry, &self.faces) {
            (Some(geometry), Some(faces)) => faces
                .iter()
                .map(|f| geometry::map_rectangle(geometry, &f.rectangle))
                .collect(),
            _ => Vec::new(),
        };
        debug!(
            "rebuilt {} region(s), geometry {:?}",
            self.regions.len(),
            self.geometry
        );
        self.rebuild_landmarks();
    }

    fn rebuild_landmarks(&mut self) {
        self.landmarks.clear();
        let (Some(index), Some(geometry)) = (self.selection.current(), self.geometry.as_ref())
        else {
            return;
        };
        if let Some(face) = self.faces().get(index) {
            let points: Vec<Point> = face
                .landmarks
                .named_points()
                .iter()
                .map(|(_, p)| geometry::map_point(geometry, *p))
                .collect();
            self.landmarks = points;
        }
    }
}
