mod types;

pub use types::{Application, Context, Device, Person, RequestEnvelope, Session, SystemState, User};
