pub mod errors;
pub mod invoice;
pub mod user;

pub use errors::RepositoryError;
