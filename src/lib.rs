//! # bcr-api
//!
//! Base REST controller for the BCR API.
//!
//! Supplies the pieces every endpoint of the API shares: a root health
//! check, the 404 fallback, a single JSON error envelope for everything
//! else, and the page arithmetic behind list endpoints.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Router + fallback + panic layer (api/)
//!     ├── Handlers (api/handlers/)
//!     ├── DTOs and query decoding (api/dto/)
//!     │
//!     ├── ApiError envelope (error)
//!     └── PageRequest / PaginationMetadata (domain/)
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
