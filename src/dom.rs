//! Document seam for the dropdown populator.
//!
//! The populator only ever talks to a [`Document`]. [`MemoryDocument`] is the
//! in-process backend used by the CLI and tests; a browser binding would
//! implement the same trait over real DOM nodes.

pub mod element;
pub mod memory;
pub mod render;

pub use element::{Element, SelectOption, SelectSpec};
pub use memory::{ElementKey, MemoryDocument};
pub use render::render_html;

use crate::error::DropdownResult;

/// Snapshot of a marked input taken at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedInput<K> {
    pub key: K,
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: String,
}

pub trait Document {
    /// Opaque handle addressing one element for the lifetime of a scan.
    type Key: Clone + std::fmt::Debug;

    /// All `input` elements whose `marker_attribute` equals `marker`, in document order.
    fn marked_inputs(&self, marker_attribute: &str, marker: &str) -> Vec<MarkedInput<Self::Key>>;

    /// Replace the element at `key` in place with a `select` built from `spec`.
    fn replace_with_select(&mut self, key: &Self::Key, spec: SelectSpec) -> DropdownResult<()>;

    /// Clear the options of the `select` with this id and install `options`.
    ///
    /// Implementations must apply the whole list or nothing.
    fn set_options(&mut self, id: &str, options: Vec<SelectOption>) -> DropdownResult<()>;

    /// Current options of the `select` with this id.
    fn options(&self, id: &str) -> Option<&[SelectOption]>;
}
