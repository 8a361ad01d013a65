use serde::{Deserialize, Serialize};

/// Metadata for a single portfolio project, as shown by the display layer.
///
/// Serialized with camelCase keys (`imgSrc`, `href`) to match the shape the
/// renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub href: String,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        img_src: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            img_src: img_src.into(),
            href: href.into(),
        }
    }
}

/// A named, ordered sequence of project records.
///
/// Insertion order is display order. Fields are private: once constructed, a
/// catalog can only be read, so sharing one by reference is safe from any
/// number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    name: String,
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(name: impl Into<String>, records: Vec<ProjectRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full ordered sequence, exactly as defined.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
