/// Record ids are opaque strings (`user-1a2b3c4d`, `ex-9f8e7d6c`, ...).
pub type RecordId = String;

/// All stored timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Build a short prefixed id from a fresh v4 UUID, e.g. `ex-1a2b3c4d`.
pub fn generate_id(prefix: &str) -> RecordId {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &hex[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_prefix_and_eight_hex_chars() {
        let id = generate_id("ex");
        assert!(id.starts_with("ex-"));
        let suffix = &id[3..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(generate_id("note"), generate_id("note"));
    }
}
