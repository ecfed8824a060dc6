//! Replace marked text inputs with dropdowns fed by a remote listing.
//!
//! The run is two phases:
//! 1. [`DropdownPopulator::scan_and_replace`] (synchronous): every marked input
//!    becomes a `select` holding a single disabled loading option, and its
//!    current value is captured in a [`FieldRecord`].
//! 2. [`DropdownPopulator::populate`] awaits one listing fetch and hands the
//!    resulting items to [`rebuild`] for every record.
//!
//! A failed fetch is not an error of the run: its message becomes the only
//! option of every dropdown.

pub mod registry;

pub use registry::{FieldRecord, FieldRegistry};

use crate::config::PopulatorConfig;
use crate::dom::{Document, SelectOption, SelectSpec};
use crate::error::DropdownResult;
use crate::listing::{ListingFailure, ListingOutcome, ListingSource, dropdown_items};
use std::collections::BTreeMap;

/// Result of one [`DropdownPopulator::populate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Records created by the scan.
    pub registered: usize,
    /// Dropdowns whose options were rebuilt.
    pub rebuilt: usize,
    /// Set when the listing could not be obtained.
    pub failure: Option<ListingFailure>,
}

#[derive(Debug, Clone, Default)]
pub struct DropdownPopulator {
    config: PopulatorConfig,
}

impl DropdownPopulator {
    pub fn new(config: PopulatorConfig) -> Self {
        Self { config }
    }

    /// Swap every marked input for a loading dropdown and record its value.
    ///
    /// Inputs without an `id` or `name`, whose id is already registered, or
    /// whose id is already taken by a `select`, are left untouched.
    pub fn scan_and_replace<D: Document>(&self, doc: &mut D) -> FieldRegistry {
        let mut registry = FieldRegistry::new();

        for input in doc.marked_inputs(&self.config.marker_attribute, &self.config.marker) {
            let (id, name) = match (input.id.as_deref(), input.name.as_deref()) {
                (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => (id, name),
                _ => {
                    log::warn!(
                        target: "test_name_dropdown::populator",
                        "Skipping marked input without id or name (id={:?}, name={:?})",
                        input.id,
                        input.name
                    );
                    continue;
                }
            };

            if registry.contains(id) {
                log::warn!(
                    target: "test_name_dropdown::populator",
                    "Skipping marked input with duplicate id '{}'",
                    id
                );
                continue;
            }

            // Options are later addressed by id, so an existing select with
            // this id would receive them instead of the replacement.
            if doc.options(id).is_some() {
                log::warn!(
                    target: "test_name_dropdown::populator",
                    "Skipping marked input '{}': a select with that id already exists",
                    id
                );
                continue;
            }

            if let Err(e) = doc.replace_with_select(&input.key, self.loading_select(id, name)) {
                log::warn!(
                    target: "test_name_dropdown::populator",
                    "Failed to replace input '{}': {}",
                    id,
                    e
                );
                continue;
            }

            registry.register(FieldRecord::new(id, name, input.value));
        }

        log::debug!(
            target: "test_name_dropdown::populator",
            "Registered {} dropdown(s)",
            registry.len()
        );
        registry
    }

    fn loading_select(&self, id: &str, name: &str) -> SelectSpec {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            self.config.marker_attribute.clone(),
            self.config.marker.clone(),
        );
        attributes.insert("id".to_string(), id.to_string());
        attributes.insert("name".to_string(), name.to_string());

        SelectSpec {
            attributes,
            options: vec![SelectOption::item(self.config.loading_label.clone()).disabled()],
        }
    }

    /// Rebuild every registered dropdown from a resolved listing.
    ///
    /// Returns how many dropdowns were rebuilt; per-field backend errors are
    /// logged and do not stop the others.
    pub fn apply<D: Document>(
        &self,
        doc: &mut D,
        registry: &FieldRegistry,
        outcome: &ListingOutcome,
    ) -> usize {
        let items = dropdown_items(outcome, &self.config);
        let mut rebuilt = 0;

        for record in registry.iter() {
            match rebuild(doc, record, &items) {
                Ok(()) => rebuilt += 1,
                Err(e) => log::warn!(
                    target: "test_name_dropdown::populator",
                    "Failed to rebuild '{}': {}",
                    record.element_id(),
                    e
                ),
            }
        }
        rebuilt
    }

    /// Scan, fetch the listing once, and rebuild every dropdown.
    ///
    /// The fetch is skipped when nothing was registered.
    pub async fn populate<D, S>(&self, doc: &mut D, source: &S) -> PopulateSummary
    where
        D: Document,
        S: ListingSource,
    {
        let registry = self.scan_and_replace(doc);
        if registry.is_empty() {
            log::debug!(
                target: "test_name_dropdown::populator",
                "No marked inputs; skipping listing fetch"
            );
            return PopulateSummary {
                registered: 0,
                rebuilt: 0,
                failure: None,
            };
        }

        let outcome = source.fetch().await;
        if let Err(failure) = &outcome {
            log::warn!(
                target: "test_name_dropdown::populator",
                "Listing unavailable: {}",
                failure
            );
        }

        let rebuilt = self.apply(doc, &registry, &outcome);
        PopulateSummary {
            registered: registry.len(),
            rebuilt,
            failure: outcome.err(),
        }
    }
}

/// Replace the options of `record`'s dropdown with one option per item.
///
/// Options whose text equals the record's prior value are marked selected;
/// repeated matching items are all marked. The list is built first and
/// installed in one call.
pub fn rebuild<D: Document>(
    doc: &mut D,
    record: &FieldRecord,
    items: &[String],
) -> DropdownResult<()> {
    let options = items
        .iter()
        .map(|item| SelectOption::item(item.clone()).selected(item == record.prior_value()))
        .collect();
    doc.set_options(record.element_id(), options)
}
