//! # parkview
//!
//! List screens for an RV/MH park property-management portal: records fetched
//! from the backend REST API, filtered, sorted, grouped and paginated
//! client-side by one generic view engine.
//!
//! ## Features
//!
//! - **One pipeline for every screen**: search, filters, sort, grouping and
//!   pagination driven by a per-screen [`ViewSpec`](view::ViewSpec)
//! - **Two pagination policies**: one flat page across all groups, or one
//!   paginated table per group
//! - **Typed backend access**: `ResourceService` over HTTP or in memory
//! - **Configuration-Based**: per-screen defaults from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parkview::prelude::*;
//!
//! let directory = PropertyDirectory::new(&properties);
//! let spec = notice_view_spec(&directory);
//! let criteria = ViewCriteria::new()
//!     .filter("priority", Criterion::equals("HIGH"))
//!     .group_by("property")
//!     .page_size(5);
//!
//! let result = compute_view(&notices, &spec, &criteria)?;
//! for group in &result.groups {
//!     println!("{} ({} notices)", group.label, group.total);
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod storage;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ConfigError, FieldValue, ParkError, QueryError, QueryParams, Record,
        ResourceService, ViewError,
    };

    // === View engine ===
    pub use crate::view::{
        Criterion, Group, GroupKey, ListScreen, PageWindow, PaginationPolicy, SortOrder,
        ViewCriteria, ViewResult, ViewSpec, compute_view,
    };

    // === Records ===
    pub use crate::entities::{
        Document, Notice, NoticeStatus, Payment, PaymentStatus, Priority, Property,
        PropertyDirectory, PropertyType, RequestStatus, ServiceRequest, Spot, SpotStatus, Tenant,
        TenantStatus, document_view_spec, notice_view_spec, payment_view_spec,
        service_request_view_spec, spot_view_spec, tenant_view_spec,
    };

    // === Macros ===
    pub use crate::{impl_record, impl_wire_enum};

    // === Services ===
    pub use crate::client::ApiResponse;
    #[cfg(feature = "http")]
    pub use crate::client::HttpService;
    pub use crate::storage::InMemoryService;

    // === Config ===
    pub use crate::config::{ApiConfig, PortalConfig, ScreenConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
