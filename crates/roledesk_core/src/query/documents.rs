//! Document listing, stats and size formatting.

use crate::model::document::{Document, DocumentKind};
use crate::query::contains_ignore_case;
use crate::store::DomainStore;
use crate::time::DAY_MS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Matched against the document name.
    pub search: String,
    /// `None` means all kinds.
    pub kind: Option<DocumentKind>,
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        contains_ignore_case(&document.name, &self.search.to_lowercase())
            && self.kind.map_or(true, |kind| document.kind() == kind)
    }
}

pub fn filter_documents<'a>(store: &'a DomainStore, filter: &DocumentFilter) -> Vec<&'a Document> {
    store
        .documents()
        .iter()
        .filter(|document| filter.matches(document))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub total: usize,
    /// Uploaded by the viewer.
    pub mine: usize,
    pub total_size_bytes: u64,
    /// Uploaded within the last 7 days.
    pub recent_uploads: usize,
}

pub fn document_stats(store: &DomainStore, viewer: &str, now: i64) -> DocumentStats {
    let documents = store.documents();
    DocumentStats {
        total: documents.len(),
        mine: documents
            .iter()
            .filter(|document| document.uploaded_by == viewer)
            .count(),
        total_size_bytes: documents.iter().map(|document| document.size_bytes).sum(),
        recent_uploads: documents
            .iter()
            .filter(|document| document.uploaded_at >= now - 7 * DAY_MS)
            .count(),
    }
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with 1024 steps and at most two decimals
/// (`0 Bytes`, `512 Bytes`, `1.5 KB`, `1.95 MB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::{document_stats, filter_documents, format_file_size, DocumentFilter};
    use crate::model::document::DocumentKind;
    use crate::store::DomainStore;

    fn fixed_now() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn formats_sizes_like_the_documents_page() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_048_576), "1.95 MB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn filters_by_kind_and_name() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let word = DocumentFilter {
            kind: Some(DocumentKind::Word),
            ..DocumentFilter::default()
        };
        let found = filter_documents(&store, &word);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "System Architecture.docx");

        let by_name = DocumentFilter {
            search: "requirements".to_string(),
            kind: None,
        };
        assert_eq!(filter_documents(&store, &by_name).len(), 1);
    }

    #[test]
    fn stats_count_recent_and_own_uploads() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let stats = document_stats(&store, "1", fixed_now());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.mine, 1);
        assert_eq!(stats.total_size_bytes, 2_048_576 + 1_024_768);
        assert_eq!(stats.recent_uploads, 2);
    }
}
