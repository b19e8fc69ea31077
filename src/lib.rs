//! # Plotdata
//!
//! Reactive data-point and grid-series model for chart rendering.
//!
//! Plotdata is the data layer underneath a chart: observable samples and
//! typed series collections, with no rendering of its own. Chart layers
//! register listeners on the points they draw and re-read whatever
//! fields they care about when a notification arrives.
//!
//! ## Features
//!
//! - **Lazy observability**: a [`DataPoint`](point::DataPoint) field
//!   costs a plain stored value until someone asks for its observable
//!   cell; promotion is one-way and transparent to readers
//! - **Field-agnostic notifications**: one synchronous change event per
//!   mutation, fanned out to listeners in registration order
//! - **Grid aggregation**: [`GridSeries`](series::GridSeries) computes
//!   extrema and ranges with a single uncached scan, and addresses
//!   items by integer (x, y) coordinate
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use plotdata::prelude::*;
//!
//! let series = GridSeries::with_items(
//!     vec![
//!         DataPoint::new(1.0, 1.0, 5.0),
//!         DataPoint::new(2.0, 1.0, 1.0),
//!         DataPoint::new(1.0, 2.0, 9.0),
//!     ],
//!     ChartType::MatrixHeatmap,
//! );
//!
//! series.items()[0].add_listener(Rc::new(|e| {
//!     println!("point changed: {}", e.source());
//! }));
//!
//! assert_eq!(series.max_z()?, 9.0);
//! series.set_at(1, 1, 7.5); // notifies the (1, 1) point's listeners
//! assert_eq!(series.get_at(1, 1), 7.5);
//! # Ok::<(), plotdata::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serde derives on the plain value types
//!   ([`Rgba`](color::Rgba), [`Symbol`](symbol::Symbol),
//!   [`ChartType`](series::ChartType))
//!
//! ## Concurrency
//!
//! Single-threaded by design: dispatch is synchronous and
//! run-to-completion, and the handle types are `Rc`-based (not `Send`).
//! Listener lists are snapshotted at fire time, so reentrant
//! registration changes from inside a callback are safe.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for data-point styling.
pub mod color;

/// Change-notification events and listener types.
pub mod event;

/// Observable value cells (the promoted form of a field).
pub mod observable;

/// Observable chart data points.
pub mod point;

/// Grid series collections and the chart-type tag.
pub mod series;

/// Marker symbols.
pub mod symbol;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for plotdata operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use plotdata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::event::{
        ChangeEvent, ChangeListener, SeriesEvent, SeriesEventType, SeriesListener,
    };
    pub use crate::observable::ObservableCell;
    pub use crate::point::{DataPoint, GridPoint};
    pub use crate::series::{ChartType, GridSeries};
    pub use crate::symbol::Symbol;
}

// ============================================================================
// Tests
// ============================================================================
