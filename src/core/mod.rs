//! # Core Application Logic
//!
//! The business logic of the card list. It knows nothing about any specific
//! UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (root state)     │
//!                    │  • SearchForm (input)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Lookup   │
//!           │  Adapter   │              │  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`profile`]: `ProfileRecord` and the append-only `ProfileCollection`
//! - [`search`]: the `SearchForm` Idle/Submitting state machine
//! - [`state`]: the `App` struct, the root that owns the collection
//! - [`action`]: the `Action` enum, `Effect`, and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod profile;
pub mod search;
pub mod state;
