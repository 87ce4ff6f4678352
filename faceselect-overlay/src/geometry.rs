use crate::error::{OverlayError, Result};
use crate::face::{FaceRectangle, Point, Size};

/// Display-space rectangle for one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inclusive on all edges, so a tap on the border still counts.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Scale factors from detection space to display space.
///
/// Computed once per image load (or viewport change) and reused for every
/// rectangle and landmark of that image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayGeometry {
    pub sx: f64,
    pub sy: f64,
    pub rendered: Size,
}

fn check_size(size: Size) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(OverlayError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

pub fn compute_geometry(detection: Size, rendered: Size) -> Result<DisplayGeometry> {
    check_size(detection)?;
    check_size(rendered)?;
    Ok(DisplayGeometry {
        sx: rendered.width / detection.width,
        sy: rendered.height / detection.height,
        rendered,
    })
}

pub fn map_rectangle(geometry: &DisplayGeometry, rect: &FaceRectangle) -> Region {
    Region {
        x: rect.left as f64 * geometry.sx,
        y: rect.top as f64 * geometry.sy,
        width: rect.width as f64 * geometry.sx,
        height: rect.height as f64 * geometry.sy,
    }
}

pub fn map_point(geometry: &DisplayGeometry, p: Point) -> Point {
    Point::new(p.x * geometry.sx, p.y * geometry.sy)
}

/// Display space back to detection space.
pub fn unmap_point(geometry: &DisplayGeometry, p: Point) -> Point {
    Point::new(p.x / geometry.sx, p.y / geometry.sy)
}

/// Rendered size for an image shown in a viewport of the given width.
///
/// Images wider than the viewport are scaled down uniformly to fit its width;
/// narrower images keep their native size.
pub fn fit_to_viewport(image: Size, viewport_width: f64) -> Result<Size> {
    check_size(image)?;
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return Err(OverlayError::InvalidSize {
            width: viewport_width,
            height: image.height,
        });
    }
    if image.width <= viewport_width {
        return Ok(image);
    }
    let scale = viewport_width / image.width;
    Ok(Size::new(image.width * scale, image.height * scale))
}
