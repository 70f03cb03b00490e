//! Community Join - Main Library
//!
//! Drives the "join our community" section of a static page: a join button
//! pointing at a Discord invite, a "coming soon" notice for development
//! builds, and an error notice when no usable invite is configured.
//!
//! # Overview
//!
//! - Validation of invite codes and invite links into an [`InviteCode`]
//! - An immutable [`AppConfig`] embedded from `join.toml` at compile time
//! - One-time page initialization that reveals exactly one region
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Invite validation
//!   - Configuration
//!   - Error types
//!
//! - **`page`** - Page initialization
//!   - Host/element traits for the DOM contract
//!   - Document readiness gate
//!   - In-memory page model for host-side use
//!
//! - **`web`** - Browser bindings (only compiled with the `web` feature on wasm32)
//!
//! # Feature Flags
//!
//! - **`web`** - `wasm-bindgen`/`web-sys` bindings, console logging and the
//!   wasm start hook
//!
//! # Usage
//!
//! ```rust
//! use community_join::{initialize_page, AppConfig, MemoryPage};
//!
//! let page = MemoryPage::with_standard_elements();
//! let config = AppConfig::builder().invite("xanoks").build();
//!
//! let state = initialize_page(&page, &config).unwrap();
//! assert_eq!(state.element_id(), "join-btn");
//! assert_eq!(
//!     page.attribute("join-btn", "href").as_deref(),
//!     Some("https://discord.gg/xanoks")
//! );
//! ```
//!
//! # Error Handling
//!
//! Nothing here panics or throws into the page. A missing element or failed
//! DOM write is logged through `tracing` and the page is left untouched; a
//! missing or invalid invite shows the error notice.

/// Shared types and data structures
pub mod shared;

/// Page initialization
pub mod page;

/// Browser bindings
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use page::{boot, initialize_page, MemoryPage, PageState};
pub use shared::{validate_invite, AppConfig, InviteCode, JoinError};
