use crate::errors::AppError;

pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A comment that passed validation, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub author: String,
}

/// Trims the content and rejects it when nothing is left. A missing or
/// blank author becomes [`DEFAULT_AUTHOR`].
pub fn validate_comment(content: Option<&str>, author: Option<&str>) -> Result<NewComment, AppError> {
    let content = content.map(str::trim).unwrap_or_default();
    if content.is_empty() {
        return Err(AppError::Validation("Comment content is required".to_string()));
    }

    let author = author
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(DEFAULT_AUTHOR);

    Ok(NewComment {
        content: content.to_string(),
        author: author.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        let c = validate_comment(Some("  Great layout!  "), Some("Priya")).unwrap();
        assert_eq!(c.content, "Great layout!");
        assert_eq!(c.author, "Priya");
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(validate_comment(Some(""), None).is_err());
    }

    #[test]
    fn test_whitespace_content_rejected() {
        assert!(validate_comment(Some(" \n\t "), Some("Priya")).is_err());
    }

    #[test]
    fn test_missing_content_rejected() {
        assert!(validate_comment(None, Some("Priya")).is_err());
    }

    #[test]
    fn test_blank_author_defaults() {
        let c = validate_comment(Some("ok"), Some("   ")).unwrap();
        assert_eq!(c.author, DEFAULT_AUTHOR);
        let c = validate_comment(Some("ok"), None).unwrap();
        assert_eq!(c.author, DEFAULT_AUTHOR);
    }
}
