//! UI module for the BuildCost GUI
//!
//! One module per screen, each exposing a `view` function that renders
//! from borrowed state and emits [`crate::Message`]s.
//!
//! # Sign-in flow
//! - `onboarding` - Four intro slides with Next/Skip
//! - `login` - Email/password form
//! - `signup` - Account form with terms checkbox
//!
//! # Main screens
//! - `home` - Quick actions, totals, recent estimates
//! - `project_input` - Dimensions, project details, material selection
//! - `estimation_result` - Total, dimensions, material lines, actions
//! - `cost_breakdown` - Pie chart and rate editing
//! - `my_projects` - Saved project list
//! - `bills_documents` - Searchable bill/document tabs
//! - `settings` - Theme, currency, default rates, backup
//!
//! # Chrome
//! - `nav_bar` - Bottom tab bar
//! - `status_bar` - Toast notifications
//!
//! # Shared Components
//! - `shared/pie_chart` - Canvas pie chart of cost shares
//! - `shared/widgets` - Cards, headers and labeled inputs

// Sign-in flow
pub mod onboarding;
pub mod login;
pub mod signup;

// Main screens
pub mod home;
pub mod project_input;
pub mod estimation_result;
pub mod cost_breakdown;
pub mod my_projects;
pub mod bills_documents;
pub mod settings;

// Chrome
pub mod nav_bar;
pub mod status_bar;

// Shared components
pub mod shared;
