//! # Core Application Logic
//!
//! This module contains the idea generator's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Service   │
//!            │  Adapter   │ ─────────▶ │   (HTTP)   │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`domain`]: The static domain catalog
//! - [`config`]: Config file, env and CLI resolution
//! - [`theme`]: Light/dark theme selection

pub mod action;
pub mod config;
pub mod domain;
pub mod state;
pub mod theme;
