// Public sharing: the read-only page, the share descriptor (link + QR
// parameters) and the PDF export parameters used by the builder.

pub mod export;
pub mod handlers;
pub mod links;
