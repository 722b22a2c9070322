//! Document mutators. Documents have no update path.

use crate::model::document::{Document, NewDocument};
use crate::model::new_entity_id;
use crate::model::system_log::{ACTION_DOCUMENT_DELETED, ACTION_DOCUMENT_UPLOADED};
use crate::model::EntityId;
use crate::store::DomainStore;

impl DomainStore {
    /// Logs `Document Uploaded` attributed to `uploaded_by`.
    pub fn upload_document(&mut self, new_document: NewDocument) -> EntityId {
        let document = Document {
            id: new_entity_id(),
            name: new_document.name,
            mime_type: new_document.mime_type,
            size_bytes: new_document.size_bytes,
            uploaded_by: new_document.uploaded_by,
            uploaded_at: self.now(),
            content: new_document.content,
        };
        let id = document.id.clone();
        let details = format!("Uploaded: {}", document.name);
        let uploaded_by = document.uploaded_by.clone();
        self.documents.push(document);
        self.add_system_log(ACTION_DOCUMENT_UPLOADED, uploaded_by, "User", details);
        id
    }

    /// Logs `Document Deleted` unconditionally.
    pub fn delete_document(&mut self, id: &str) {
        self.documents.retain(|document| document.id != id);
        self.add_system_log(
            ACTION_DOCUMENT_DELETED,
            "",
            "User",
            format!("Deleted document: {id}"),
        );
    }
}
