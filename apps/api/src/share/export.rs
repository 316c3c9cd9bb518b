use serde::Serialize;

use crate::resume::models::ResumeData;

/// A4 portrait, millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Capture scale applied when rasterising the preview.
pub const CAPTURE_SCALE: f64 = 2.0;

pub const ORIENTATION: &str = "portrait";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PdfExport {
    pub file_name: String,
    pub orientation: &'static str,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub capture_scale: f64,
}

/// Where the captured image lands on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PdfExport {
    pub fn for_resume(data: &ResumeData) -> Self {
        Self {
            file_name: format!("{}_resume.pdf", data.display_name()),
            orientation: ORIENTATION,
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            capture_scale: CAPTURE_SCALE,
        }
    }

    /// Scales an image of `image_width`×`image_height` uniformly so it fits
    /// the page, centred horizontally and pinned to the top edge.
    ///
    /// Returns `None` for a degenerate (zero-area) capture.
    pub fn place(&self, image_width: f64, image_height: f64) -> Option<Placement> {
        if image_width <= 0.0 || image_height <= 0.0 {
            return None;
        }
        let ratio = (self.page_width_mm / image_width).min(self.page_height_mm / image_height);
        let width = image_width * ratio;
        Some(Placement {
            x: (self.page_width_mm - width) / 2.0,
            y: 0.0,
            width,
            height: image_height * ratio,
        })
    }
}
