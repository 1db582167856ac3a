pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::UserSummary;
pub use errors::UserError;
pub use ports::UserRepository;
