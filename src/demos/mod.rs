//! Self-contained interactive demo widgets.
//!
//! Each widget is independent - none depends on another's output - and the
//! computational ones (ROI, search, validation, palette) are pure functions.
//! Side effects (notifications, mail) are dispatched by the application
//! controller, not here.

pub mod analytics;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod optimizer;
pub mod palette;
pub mod roi;
pub mod search;
pub mod validator;

pub use analytics::AnalyticsSnapshot;
pub use booking::BookingState;
pub use cart::Cart;
pub use catalog::{CatalogItem, CATALOG};
pub use optimizer::OptimizationResult;
pub use palette::ColorPalette;
pub use roi::RoiReport;
pub use validator::EmailCheck;
