pub mod errors;
pub mod id;
pub mod message;

pub use errors::{ConfigError, GuruError, PlatformError};
pub use id::{new_id, SessionId};
pub use message::{now_millis, Message, Sender};

pub type Result<T> = std::result::Result<T, GuruError>;
