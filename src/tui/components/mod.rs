//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: title line with status or error
//! - `ProfileCard`: one profile as a bordered card
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: username field and "Add card" button
//! - `ProfileList`: scrollable column of cards
//!
//! Components receive external data as props (struct fields) and never
//! reach into `App` themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ProfileList::new(&mut tui.profile_list, app.profiles().as_slice()).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! ProfileList::render(frame, area); // reads from global App
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs         (title / status line)
//! ├── profile_card.rs   (single card)
//! ├── profile_list.rs   (scrollable card container)
//! └── search_box/       (username input + button)
//! ```

pub mod header;
pub mod profile_card;
pub mod profile_list;
pub mod search_box;

pub use header::Header;
pub use profile_card::ProfileCard;
pub use profile_list::{ProfileList, ProfileListState};
pub use search_box::{SearchBox, SearchEvent};
