use crate::adapters::memory::MemoryContainer;
use crate::domain::model::DEFAULT_CONTAINER_ID;
use crate::utils::error::{FetchError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A page's container elements, addressed by id.
#[derive(Debug, Default)]
pub struct Document {
    elements: RwLock<HashMap<String, Arc<MemoryContainer>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding an empty `teachers-container`.
    pub fn directory_page() -> Self {
        let document = Self::new();
        document.insert_element(DEFAULT_CONTAINER_ID, MemoryContainer::new());
        document
    }

    /// Adds or replaces the element with `id`, returning the stored handle.
    pub fn insert_element(&self, id: &str, element: MemoryContainer) -> Arc<MemoryContainer> {
        let element = Arc::new(element);
        self.elements
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.to_string(), Arc::clone(&element));
        element
    }

    pub fn get_element_by_id(&self, id: &str) -> Result<Arc<MemoryContainer>> {
        self.elements
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::MissingContainer { id: id.to_string() })
    }
}
