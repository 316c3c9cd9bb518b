// Database row types and their conversions into the API models.
pub mod resume;
