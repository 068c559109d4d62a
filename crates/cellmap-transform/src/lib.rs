//! Configuration transform utilities.
//!
//! This crate carries a cell-mapping configuration between its
//! representations:
//!
//! - **export**: draft to canonical export lowering and rehydration
//! - **canonical**: stable JSON serialization and snapshot equality
//! - **version**: `"v<number>"` tag parsing and bumping
//! - **stored**: the persisted draft-bundle codec with legacy migration

pub mod canonical;
pub mod export;
pub mod stored;
pub mod version;

pub use canonical::{are_exports_equal, canonical_json};
pub use export::{
    draft_from_export, draft_from_export_configuration, normalize_export_configuration,
    to_export_configuration,
};
pub use stored::{parse_stored_bundle, serialize_stored_bundle};
pub use version::{increment_version_tag, parse_version_tag};
