// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between HTTP clients and the domain
// - It translates between DTOs and domain entities
// - Errors become status codes here and nowhere else

pub mod dto;
pub mod error_handling;
pub mod handlers;
pub mod router;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use router::build_router;
pub use state::AppState;
