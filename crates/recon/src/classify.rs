use std::collections::BTreeMap;

use crate::model::{CategoryCount, CategoryTally, Document};

struct Category {
    name: String,
    substring: String,
    /// Lowercased substring, matched against lowercased haystacks.
    needle: String,
}

/// Tallies documents against a fixed set of keyword categories.
///
/// Each category matches when its substring appears, case-insensitively,
/// in a document's identifier or content. Categories are independent: a
/// single document may increment several of them, each at most once.
pub struct KeywordClassifier {
    categories: Vec<Category>,
}

impl KeywordClassifier {
    pub fn new(categories: &BTreeMap<String, String>) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|(name, substring)| Category {
                    name: name.clone(),
                    substring: substring.clone(),
                    needle: substring.to_lowercase(),
                })
                .collect(),
        }
    }

    /// Pure counting pass over the feed. Every configured category appears
    /// in the output, zeroes included and ordered by name, so downstream
    /// summary shape is stable. A document with nothing readable is
    /// counted as skipped and matches no category; identifier and content
    /// are matched independently, so an identifier-only document still
    /// participates.
    pub fn tally(&self, documents: &[Document]) -> CategoryTally {
        let mut tally = CategoryTally {
            counts: self
                .categories
                .iter()
                .map(|c| CategoryCount {
                    name: c.name.clone(),
                    substring: c.substring.clone(),
                    count: 0,
                })
                .collect(),
            skipped_documents: 0,
        };

        for doc in documents {
            if doc.identifier.is_none() && doc.content.is_none() {
                tally.skipped_documents += 1;
                continue;
            }

            let identifier = doc.identifier.as_deref().map(str::to_lowercase);
            let content = doc.content.as_deref().map(str::to_lowercase);

            for (i, category) in self.categories.iter().enumerate() {
                let needle = category.needle.as_str();
                let hit = identifier.as_deref().is_some_and(|t| t.contains(needle))
                    || content.as_deref().is_some_and(|t| t.contains(needle));
                if hit {
                    tally.counts[i].count += 1;
                }
            }
        }

        tally
    }
}
