//! Grouping research documents into topics.
//!
//! Documents sharing a `topic_slug` represent one subject across its
//! research/prep/session/practice/complete lifecycle; a document without a
//! topic_slug is its own group.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ResearchDocument;
use crate::enums::DocCategory;

/// Set of documents sharing a `topic_slug`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicGroup {
    pub topic_slug: String,
    pub title: String,
    pub category: DocCategory,
    /// Members ordered research → prep → session → practice → complete.
    pub documents: Vec<ResearchDocument>,
    /// Most recent update across the group.
    pub updated_at: DateTime<Utc>,
}

/// Group documents into topics. The group title and category come from the
/// `research`-status member when present, else the first member. Groups are
/// sorted by most recent update, newest first.
#[must_use]
pub fn group_topics(documents: Vec<ResearchDocument>) -> Vec<TopicGroup> {
    let mut grouped: BTreeMap<String, Vec<ResearchDocument>> = BTreeMap::new();
    for doc in documents {
        let key = doc.topic_slug.clone().unwrap_or_else(|| doc.slug.clone());
        grouped.entry(key).or_default().push(doc);
    }

    let mut groups: Vec<TopicGroup> = grouped
        .into_iter()
        .map(|(topic_slug, mut docs)| {
            docs.sort_by_key(|d| d.status.rank());
            let primary = docs
                .iter()
                .find(|d| d.status == crate::enums::DocStatus::Research)
                .unwrap_or(&docs[0]);
            let title = primary.title.clone();
            let category = primary.category;
            let updated_at = docs.iter().map(|d| d.updated_at).max().unwrap_or_default();
            TopicGroup {
                topic_slug,
                title,
                category,
                documents: docs,
                updated_at,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DocStatus;
    use chrono::{Datelike, TimeZone};

    fn doc(slug: &str, topic: Option<&str>, status: DocStatus, day: u32) -> ResearchDocument {
        let ts = Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap();
        ResearchDocument {
            id: format!("doc-{slug}"),
            title: slug.replace('-', " "),
            slug: slug.to_string(),
            category: DocCategory::Speech,
            content: String::new(),
            sections: Vec::new(),
            status,
            topic_slug: topic.map(String::from),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn shared_topic_slug_forms_one_group() {
        let docs = vec![
            doc("mishpatim-practice", Some("mishpatim"), DocStatus::Practice, 2),
            doc("mishpatim-research", Some("mishpatim"), DocStatus::Research, 1),
        ];
        let groups = group_topics(docs);
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(group.topic_slug, "mishpatim");
        assert_eq!(group.documents.len(), 2);
        assert_eq!(group.documents[0].status, DocStatus::Research);
        assert_eq!(group.documents[1].status, DocStatus::Practice);
        // Title comes from the research member.
        assert_eq!(group.title, "mishpatim research");
    }

    #[test]
    fn document_without_topic_is_its_own_group() {
        let docs = vec![
            doc("standalone", None, DocStatus::Prep, 3),
            doc("other", None, DocStatus::Research, 4),
        ];
        assert_eq!(group_topics(docs).len(), 2);
    }

    #[test]
    fn groups_sorted_by_latest_update_desc() {
        let docs = vec![
            doc("old", None, DocStatus::Research, 1),
            doc("new", None, DocStatus::Research, 9),
            doc("mid", None, DocStatus::Research, 5),
        ];
        let slugs: Vec<String> = group_topics(docs).into_iter().map(|g| g.topic_slug).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn group_updated_at_is_group_maximum() {
        let docs = vec![
            doc("t-research", Some("t"), DocStatus::Research, 1),
            doc("t-practice", Some("t"), DocStatus::Practice, 8),
        ];
        let groups = group_topics(docs);
        assert_eq!(groups[0].updated_at.day(), 8);
    }
}
