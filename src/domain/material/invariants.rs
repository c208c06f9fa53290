use super::entity::{MaterialDraft, MAX_CONTENT_URL_LEN};
use crate::domain::{DomainError, DomainResult};

/// Validates all Material invariants that can be checked before insert.
///
/// Topic existence is not checked here; it needs the topic collaborator
/// and is enforced by the ingestion service.
pub fn validate_material(draft: &MaterialDraft) -> DomainResult<()> {
    validate_title(&draft.material.title)?;
    validate_content_url(&draft.material.content_url)?;
    Ok(())
}

/// Title must be non-empty. Whitespace-only titles are kept as given.
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Material title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Content URL must be present and bounded
fn validate_content_url(content_url: &str) -> DomainResult<()> {
    if content_url.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Material content URL cannot be empty".to_string(),
        ));
    }

    let len = content_url.chars().count();
    if len > MAX_CONTENT_URL_LEN {
        return Err(DomainError::InvariantViolation(format!(
            "Material content URL is {} characters, limit is {}",
            len, MAX_CONTENT_URL_LEN
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Material domain:
///
/// 1. Identity is assigned by the repository and never changes
/// 2. A material belongs to exactly one topic, which exists at creation
/// 3. Type is always one of PDF, VIDEO, IMAGE, URL
/// 4. Title is non-empty (taken as-is, never trimmed)
/// 5. Content URL is non-empty and at most 5000 characters
/// 6. No update after creation; deletion is hard

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{MaterialType, NewMaterial};

    fn draft(title: &str, content_url: String) -> MaterialDraft {
        NewMaterial::new(title.to_string(), MaterialType::Url, content_url).for_topic(1)
    }

    #[test]
    fn test_valid_material() {
        let d = draft("Rust book", "https://doc.rust-lang.org/book/".to_string());
        assert!(validate_material(&d).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let d = draft("", "https://example.com".to_string());
        assert!(validate_material(&d).is_err());
    }

    #[test]
    fn test_whitespace_title_is_accepted_as_is() {
        let d = draft("   ", "https://example.com".to_string());
        assert!(validate_material(&d).is_ok());
    }

    #[test]
    fn test_empty_content_url_fails() {
        let d = draft("Notes", String::new());
        assert!(validate_material(&d).is_err());
    }

    #[test]
    fn test_content_url_length_limit() {
        let at_limit = draft("Notes", "a".repeat(MAX_CONTENT_URL_LEN));
        assert!(validate_material(&at_limit).is_ok());

        let over = draft("Notes", "a".repeat(MAX_CONTENT_URL_LEN + 1));
        match validate_material(&over) {
            Err(DomainError::InvariantViolation(msg)) => assert!(msg.contains("limit is 5000")),
            other => panic!("Expected InvariantViolation error, got {:?}", other),
        }
    }
}
