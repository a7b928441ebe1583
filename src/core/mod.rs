pub mod services;
pub mod session;

pub use session::Session;
