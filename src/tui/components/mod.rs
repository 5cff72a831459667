//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Header`: app title, tagline, theme indicator
//! - `GenerateButton`: submit control with loading spinner
//! - `StatusBar`: status message and key hints
//! - `IdeaCard`: one idea rendered as a card
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `DomainSelector`: button plus dropdown list over the catalog
//! - `ProblemInput`: single-line text field
//! - `IdeaGrid`: scrollable card grid
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `...State` struct lives in `TuiState`, the wrapper is built
//! each frame with borrowed state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── header.rs           (Top banner)
//! ├── domain_selector.rs  (Dropdown)
//! ├── problem_input.rs    (Text field)
//! ├── generate_button.rs  (Submit control)
//! ├── idea_card.rs        (Single idea)
//! ├── idea_grid.rs        (Scrollable card container)
//! └── status_bar.rs       (Bottom line)
//! ```

pub mod domain_selector;
pub mod generate_button;
pub mod header;
pub mod idea_card;
pub mod idea_grid;
pub mod problem_input;
pub mod status_bar;

pub use domain_selector::{DomainSelector, DomainSelectorState, SelectorEvent};
pub use generate_button::GenerateButton;
pub use header::Header;
pub use idea_card::IdeaCard;
pub use idea_grid::{IdeaGrid, IdeaGridState};
pub use problem_input::{ProblemEvent, ProblemInput};
pub use status_bar::StatusBar;
