//! Shared UI components reusable across screens
//!
//! Contains:
//! - `pie_chart` - Canvas drawing for the cost distribution chart
//! - `widgets` - Small layout helpers (cards, headers, inputs)

pub mod pie_chart;
pub mod widgets;
