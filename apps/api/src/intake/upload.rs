//! Work samples and profile photo. Files are inlined into the resume as
//! base64 data URIs.

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use tracing::debug;

use crate::resume::models::{PortfolioItem, PortfolioKind, ResumeData};

#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl From<MediaKind> for PortfolioKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => PortfolioKind::Image,
            MediaKind::Video => PortfolioKind::Video,
        }
    }
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub added: Vec<PortfolioItem>,
    pub skipped: Vec<String>,
}

/// Appends every image or video to the portfolio, titled with its file
/// name. Anything else is reported as skipped.
pub fn ingest_files(draft: &mut ResumeData, files: Vec<IncomingFile>) -> IngestReport {
    let mut report = IngestReport::default();
    for file in files {
        let Some(kind) = MediaKind::from_mime(&file.mime) else {
            debug!(name = %file.name, mime = %file.mime, "Skipping unsupported upload");
            report.skipped.push(file.name);
            continue;
        };
        let item = PortfolioItem {
            kind: kind.into(),
            url: to_data_uri(&file.mime, &file.bytes),
            title: Some(file.name),
            ..PortfolioItem::default()
        };
        draft.portfolio.push(item.clone());
        report.added.push(item);
    }
    report
}

/// Returns false (and leaves the photo alone) for non-image files.
pub fn set_profile_photo(draft: &mut ResumeData, file: &IncomingFile) -> bool {
    if MediaKind::from_mime(&file.mime) != Some(MediaKind::Image) {
        return false;
    }
    draft.photo = Some(to_data_uri(&file.mime, &file.bytes));
    true
}

pub fn remove_portfolio_item(draft: &mut ResumeData, id: &str) -> bool {
    let before = draft.portfolio.len();
    draft.portfolio.retain(|p| p.id != id);
    draft.portfolio.len() != before
}

pub fn clear_profile_photo(draft: &mut ResumeData) {
    draft.photo = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> IncomingFile {
        IncomingFile {
            name: name.to_string(),
            mime: mime.to_string(),
            bytes: b"hi".to_vec(),
        }
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_only_media_enters_portfolio() {
        let mut draft = ResumeData::default();
        let report = ingest_files(
            &mut draft,
            vec![
                file("wall.jpg", "image/jpeg"),
                file("cv.pdf", "application/pdf"),
                file("site.mp4", "video/mp4"),
            ],
        );

        assert_eq!(report.skipped, vec!["cv.pdf".to_string()]);
        assert_eq!(draft.portfolio.len(), 2);
        assert_eq!(draft.portfolio[0].kind, PortfolioKind::Image);
        assert_eq!(draft.portfolio[0].title.as_deref(), Some("wall.jpg"));
        assert!(draft.portfolio[0].url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(draft.portfolio[1].kind, PortfolioKind::Video);
    }

    #[test]
    fn test_photo_accepts_images_only() {
        let mut draft = ResumeData::default();
        assert!(!set_profile_photo(&mut draft, &file("clip.mp4", "video/mp4")));
        assert!(draft.photo.is_none());

        assert!(set_profile_photo(&mut draft, &file("me.png", "image/png")));
        assert_eq!(draft.photo.as_deref(), Some("data:image/png;base64,aGk="));

        clear_profile_photo(&mut draft);
        assert!(draft.photo.is_none());
    }

    #[test]
    fn test_remove_by_id() {
        let mut draft = ResumeData::default();
        let report = ingest_files(&mut draft, vec![file("a.png", "image/png"), file("b.png", "image/png")]);
        let first = report.added[0].id.clone();

        assert!(remove_portfolio_item(&mut draft, &first));
        assert!(!remove_portfolio_item(&mut draft, &first));
        assert_eq!(draft.portfolio.len(), 1);
        assert_eq!(draft.portfolio[0].title.as_deref(), Some("b.png"));
    }
}
