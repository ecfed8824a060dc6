/// What the populator remembers about one replaced input.
///
/// Created at scan time; `prior_value` cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    element_id: String,
    name: String,
    prior_value: String,
}

impl FieldRecord {
    pub fn new(
        element_id: impl Into<String>,
        name: impl Into<String>,
        prior_value: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            name: name.into(),
            prior_value: prior_value.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prior_value(&self) -> &str {
        &self.prior_value
    }
}

/// One record per accepted marked element, in scan order, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    records: Vec<FieldRecord>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns false, leaving the registry unchanged, if the id
    /// is already registered.
    pub fn register(&mut self, record: FieldRecord) -> bool {
        if self.contains(record.element_id()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn contains(&self, element_id: &str) -> bool {
        self.get(element_id).is_some()
    }

    pub fn get(&self, element_id: &str) -> Option<&FieldRecord> {
        self.records.iter().find(|r| r.element_id == element_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
