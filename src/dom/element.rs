use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const INPUT_TAG: &str = "input";
pub const SELECT_TAG: &str = "select";

/// One `<option>` child of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    /// An option whose text and value are both `item`.
    pub fn item(item: impl Into<String>) -> Self {
        let item = item.into();
        Self {
            value: item.clone(),
            text: item,
            selected: false,
            disabled: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A flat page element: tag, attributes, current value and (for selects) options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// The input's value: the `value` field, or the `value` attribute when
    /// the field is empty.
    pub fn current_value(&self) -> &str {
        if self.value.is_empty() {
            self.attribute("value").unwrap_or_default()
        } else {
            &self.value
        }
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

/// Description of the `<select>` that replaces a marked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSpec {
    pub attributes: BTreeMap<String, String>,
    pub options: Vec<SelectOption>,
}

impl SelectSpec {
    pub fn into_element(self) -> Element {
        Element {
            tag: SELECT_TAG.to_string(),
            attributes: self.attributes,
            value: String::new(),
            options: self.options,
        }
    }
}
