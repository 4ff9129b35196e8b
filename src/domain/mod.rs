//! Domain layer: request-independent value types.

pub mod pagination;

pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, PaginationMetadata};
