//! ID prefix constants for all Maggid entities.
//!
//! IDs have the form `<prefix>-<8 hex chars>`, generated by the database
//! layer via `randomblob(4)`.

pub const PREFIX_DOCUMENT: &str = "doc";
pub const PREFIX_COMMENT: &str = "cmt";
pub const PREFIX_PIPELINE: &str = "pip";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_EVENT: &str = "evt";
pub const PREFIX_BLOCK: &str = "blk";
pub const PREFIX_RITUAL: &str = "rit";
pub const PREFIX_RITUAL_COMPLETION: &str = "rcp";
pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_SEGMENT: &str = "seg";
pub const PREFIX_STORY: &str = "sto";
pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_PRACTICE_LOG: &str = "plg";
pub const PREFIX_DELIVERY: &str = "dlv";
pub const PREFIX_MASECHTA: &str = "mas";
pub const PREFIX_SHAS_COMPLETION: &str = "shc";
pub const PREFIX_QUIZ: &str = "qiz";
pub const PREFIX_CAPTURE: &str = "cap";
pub const PREFIX_GOAL: &str = "gol";
pub const PREFIX_REFLECTION: &str = "rfl";
pub const PREFIX_USAGE: &str = "usg";

/// Every prefix in use, for uniqueness tests.
pub const ALL_PREFIXES: [&str; 21] = [
    PREFIX_DOCUMENT,
    PREFIX_COMMENT,
    PREFIX_PIPELINE,
    PREFIX_TASK,
    PREFIX_EVENT,
    PREFIX_BLOCK,
    PREFIX_RITUAL,
    PREFIX_RITUAL_COMPLETION,
    PREFIX_COURSE,
    PREFIX_SEGMENT,
    PREFIX_STORY,
    PREFIX_QUESTION,
    PREFIX_PRACTICE_LOG,
    PREFIX_DELIVERY,
    PREFIX_MASECHTA,
    PREFIX_SHAS_COMPLETION,
    PREFIX_QUIZ,
    PREFIX_CAPTURE,
    PREFIX_GOAL,
    PREFIX_REFLECTION,
    PREFIX_USAGE,
];

#[cfg(test)]
mod tests {
    use super::ALL_PREFIXES;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique_and_three_chars() {
        let set: HashSet<_> = ALL_PREFIXES.iter().collect();
        assert_eq!(set.len(), ALL_PREFIXES.len());
        assert!(ALL_PREFIXES.iter().all(|p| p.len() == 3));
    }
}
