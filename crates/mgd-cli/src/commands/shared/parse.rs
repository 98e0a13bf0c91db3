use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use mgd_core::enums::{CompletionType, PipelineStage, TaskStatus};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("in_progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: TaskStatus = parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);

        let stage: PipelineStage = parse_enum("draft", "stage").expect("stage should parse");
        assert_eq!(stage, PipelineStage::Draft);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<CompletionType>("daf-yomi", "track").expect_err("should fail");
        assert!(err.to_string().contains("invalid track 'daf-yomi'"));
    }
}
