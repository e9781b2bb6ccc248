pub mod error;
pub mod handlers;

pub use error::ServiceError;
pub use handlers::PlacesService;
