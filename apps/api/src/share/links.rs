use serde::Serialize;
use uuid::Uuid;

use crate::resume::models::ResumeData;

const QR_SIZE_PX: u32 = 180;
const QR_DOWNLOAD_PX: u32 = 360;
const QR_FOREGROUND: &str = "#1e293b";
const QR_BACKGROUND: &str = "#ffffff";

const QR_ERROR_LEVEL: &str = "H";

/// Parameters for the QR renderer on the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrSpec {
    pub value: String,
    pub size: u32,
    pub level: &'static str,
    pub include_margin: bool,
    pub fg_color: &'static str,
    pub bg_color: &'static str,
}

/// How the rendered QR code is rasterised for download.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrDownload {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub resume_id: Uuid,
    pub url: String,
    pub qr: QrSpec,
    pub download: QrDownload,
}

pub fn public_url(base_url: &str, resume_id: Uuid) -> String {
    format!("{}/resume/{resume_id}", base_url.trim_end_matches('/'))
}

pub fn share_link(base_url: &str, resume_id: Uuid, data: &ResumeData) -> ShareLink {
    let url = public_url(base_url, resume_id);
    ShareLink {
        resume_id,
        qr: QrSpec {
            value: url.clone(),
            size: QR_SIZE_PX,
            level: QR_ERROR_LEVEL,
            include_margin: false,
            fg_color: QR_FOREGROUND,
            bg_color: QR_BACKGROUND,
        },
        download: QrDownload {
            file_name: format!("{}_qrcode.png", data.display_name()),
            width: QR_DOWNLOAD_PX,
            height: QR_DOWNLOAD_PX,
            mime_type: "image/png",
            background: QR_BACKGROUND,
        },
        url,
    }
}
