//! Park documents (rules, leases, forms)

use super::PropertyDirectory;
use crate::core::FieldValue;
use crate::impl_record;
use crate::view::{PaginationPolicy, ViewSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_name: String,
    /// MIME type or extension as reported by the upload
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl_record!(Document, "document", "documents");

impl Document {
    /// Lower-cased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Documents table, grouped by property
pub fn document_view_spec(directory: &PropertyDirectory) -> ViewSpec<Document> {
    let directory = directory.clone();
    ViewSpec::new("documents")
        .search(|d: &Document| FieldValue::from(d.title.as_str()))
        .search(|d: &Document| FieldValue::from(d.description.clone()))
        .search(|d: &Document| FieldValue::from(d.file_name.as_str()))
        .filter("category", |d: &Document| FieldValue::from(d.category.clone()))
        .filter("propertyId", |d: &Document| FieldValue::from(d.property_id.clone()))
        .filter_case_insensitive("fileType", |d: &Document| {
            FieldValue::from(d.file_type.clone().or_else(|| d.extension()))
        })
        .sort_key("uploadedAt", |d: &Document| FieldValue::from(d.uploaded_at))
        .sort_key("title", |d: &Document| FieldValue::from(d.title.as_str()))
        .sort_key("fileSize", |d: &Document| {
            FieldValue::from(d.file_size.map(|s| s as i64))
        })
        .grouping(
            "property",
            |d: &Document| d.property_id.clone(),
            move |id| directory.label(id),
        )
        .unassigned_label("General")
        .pagination(PaginationPolicy::PerGroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Criterion, ViewCriteria, compute_view};

    fn document(id: &str, file_name: &str, file_type: Option<&str>) -> Document {
        Document {
            id: id.into(),
            title: format!("Doc {}", id),
            description: None,
            file_name: file_name.into(),
            file_type: file_type.map(str::to_string),
            category: None,
            property_id: None,
            file_size: None,
            uploaded_at: None,
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(document("1", "Rules.PDF", None).extension().as_deref(), Some("pdf"));
        assert_eq!(document("1", "README", None).extension(), None);
    }

    #[test]
    fn test_file_type_falls_back_to_extension() {
        let docs = vec![
            document("1", "lease.pdf", None),
            document("2", "map.png", Some("PNG")),
            document("3", "form.PDF", Some("pdf")),
        ];
        let spec = document_view_spec(&PropertyDirectory::default());
        let criteria = ViewCriteria::new().filter("fileType", Criterion::equals("PDF"));
        let result = compute_view(&docs, &spec, &criteria).unwrap();
        let ids: Vec<_> = result.items().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_search_covers_file_name() {
        let docs = vec![document("1", "pet-policy.pdf", None), document("2", "lease.pdf", None)];
        let spec = document_view_spec(&PropertyDirectory::default());
        let result = compute_view(&docs, &spec, &ViewCriteria::new().search("PET")).unwrap();
        assert_eq!(result.total_matched, 1);
    }
}
