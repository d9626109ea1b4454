//! Notification dispatch pipeline.
//!
//! This module covers the full path from a decoded request to a
//! normalized result:
//! - `registry`: category-to-template map, built once at startup
//! - `template`: data-driven rendering entries with `{{variable}}`
//!   placeholders
//! - `validate`: required-field checks with empty-or-absent semantics
//! - `render`: pure request + template to outbound message
//! - `dispatcher`: orchestration and result normalization
//!
//! The only network component, the delivery client, lives in
//! `crate::delivery` behind a trait.

mod dispatcher;
mod registry;
mod render;
mod template;
mod types;
mod validate;

pub use dispatcher::{Dispatcher, DispatcherStats, DispatcherStatsSnapshot};
pub use registry::{
    default_registry, RegistryError, RegistryResult, TemplateRegistry, FRIEND_REQUEST,
    SHIFUSHOT_REQUEST,
};
pub use render::render;
pub use template::Template;
pub use types::{DispatchErrorCode, DispatchRequest, DispatchResult, RenderedMessage};
pub use validate::{validate_base, validate_extras, MissingFields};
