use super::element::{Element, INPUT_TAG, SELECT_TAG, SelectOption, SelectSpec};
use super::{Document, MarkedInput};
use crate::error::{DropdownError, DropdownResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Position of an element in a [`MemoryDocument`].
///
/// Replacement happens in place, so keys stay valid across a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey(usize);

/// In-memory page: a flat, ordered list of elements.
///
/// Serialized as `{ "elements": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryDocument {
    #[serde(default)]
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn from_json(json: &str) -> DropdownResult<Self> {
        serde_json::from_str(json).map_err(|e| DropdownError::page(e.to_string()))
    }

    pub fn load(path: &Path) -> DropdownResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> DropdownResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DropdownError::page(e.to_string()))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == Some(id))
    }

    fn select_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|e| e.is(SELECT_TAG) && e.id() == Some(id))
    }
}

impl Document for MemoryDocument {
    type Key = ElementKey;

    fn marked_inputs(&self, marker_attribute: &str, marker: &str) -> Vec<MarkedInput<ElementKey>> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is(INPUT_TAG) && e.attribute(marker_attribute) == Some(marker))
            .map(|(index, e)| MarkedInput {
                key: ElementKey(index),
                id: e.attribute("id").map(String::from),
                name: e.attribute("name").map(String::from),
                value: e.current_value().to_string(),
            })
            .collect()
    }

    fn replace_with_select(&mut self, key: &ElementKey, spec: SelectSpec) -> DropdownResult<()> {
        let slot = self.elements.get_mut(key.0).ok_or_else(|| {
            DropdownError::element_not_found(
                spec.attributes.get("id").cloned().unwrap_or_default(),
            )
        })?;
        *slot = spec.into_element();
        Ok(())
    }

    fn set_options(&mut self, id: &str, options: Vec<SelectOption>) -> DropdownResult<()> {
        let select = self
            .select_mut(id)
            .ok_or_else(|| DropdownError::element_not_found(id))?;
        select.options = options;
        Ok(())
    }

    fn options(&self, id: &str) -> Option<&[SelectOption]> {
        self.elements
            .iter()
            .find(|e| e.is(SELECT_TAG) && e.id() == Some(id))
            .map(|e| e.options.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn marked(id: &str, value: &str) -> Element {
        Element::new("input")
            .with_attribute("type", "text")
            .with_attribute("data-test-id", "CustomTestName")
            .with_attribute("id", id)
            .with_attribute("name", id)
            .with_value(value)
    }

    #[test]
    fn test_marked_inputs_filters_by_tag_and_marker() {
        let doc = MemoryDocument::new(vec![
            marked("a", "foo.cc"),
            Element::new("input")
                .with_attribute("id", "plain")
                .with_value("x"),
            Element::new("div").with_attribute("data-test-id", "CustomTestName"),
            marked("b", ""),
        ]);

        let found = doc.marked_inputs("data-test-id", "CustomTestName");
        let ids: Vec<_> = found.iter().map(|m| m.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
        assert_eq!(found[0].value, "foo.cc");
        assert_eq!(found[1].key, ElementKey(3));
    }

    #[test]
    fn test_marked_inputs_reads_value_attribute() {
        let doc = MemoryDocument::from_json(
            r#"{"elements": [
                {"tag": "input", "attributes": {"data-test-id": "CustomTestName", "id": "a", "name": "a", "value": "foo.cc"}},
                {"tag": "input", "attributes": {"data-test-id": "CustomTestName", "id": "b", "name": "b", "value": "attr.cc"}, "value": "field.cc"}
            ]}"#,
        )
        .unwrap();

        let values: Vec<_> = doc
            .marked_inputs("data-test-id", "CustomTestName")
            .into_iter()
            .map(|m| m.value)
            .collect();
        // The value field wins when both are present
        assert_eq!(values, vec!["foo.cc", "field.cc"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut doc = MemoryDocument::new(vec![Element::new("p"), marked("a", "v")]);
        let key = doc.marked_inputs("data-test-id", "CustomTestName")[0].key;

        let mut attributes = BTreeMap::new();
        attributes.insert("id".to_string(), "a".to_string());
        doc.replace_with_select(
            &key,
            SelectSpec {
                attributes,
                options: vec![SelectOption::item("Loading...").disabled()],
            },
        )
        .unwrap();

        assert!(doc.elements()[1].is("select"));
        assert_eq!(doc.options("a").unwrap().len(), 1);
        assert!(doc.marked_inputs("data-test-id", "CustomTestName").is_empty());
    }

    #[test]
    fn test_set_options_requires_select() {
        let mut doc = MemoryDocument::new(vec![marked("a", "v")]);
        let err = doc
            .set_options("a", vec![SelectOption::item("x")])
            .unwrap_err();
        assert!(matches!(err, DropdownError::ElementNotFound { .. }));
        assert!(doc.options("a").is_none());
    }

    #[test]
    fn test_page_json_roundtrip_shape() {
        let json = r#"{
            "elements": [
                { "tag": "input", "attributes": { "id": "a", "name": "a", "data-test-id": "CustomTestName" }, "value": "foo.cc" }
            ]
        }"#;
        let doc = MemoryDocument::from_json(json).unwrap();
        assert_eq!(doc.element_by_id("a").unwrap().value, "foo.cc");

        let again = MemoryDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(again, doc);
    }

    #[test]
    fn test_from_json_reports_page_error() {
        let err = MemoryDocument::from_json("{\"elements\": 3}").unwrap_err();
        assert!(matches!(err, DropdownError::Page { .. }));
    }
}
