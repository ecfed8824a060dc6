pub mod config;
pub mod dom;
pub mod error;
pub mod listing;
pub mod populator;

pub use config::{DropdownSettings, PopulatorConfig};
pub use dom::{Document, MemoryDocument, SelectOption};
pub use error::{DropdownError, DropdownResult};
pub use listing::{
    FileListingSource, HttpListingSource, ListingFailure, ListingOutcome, ListingSource,
};
pub use populator::{DropdownPopulator, FieldRecord, FieldRegistry, PopulateSummary, rebuild};
