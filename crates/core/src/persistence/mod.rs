mod error;
mod keys;
mod traits;
mod types;

pub use error::{PersistenceError, Result, KEY_GENERATORS_NAME};
pub use keys::{device_id, person_id, user_id, KeyGenerator, KeyStrategy, ParseKeyStrategyError};
pub use traits::PersistenceAdapter;
pub use types::Attributes;
