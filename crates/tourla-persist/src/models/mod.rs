mod message;
mod profile;
mod session;

pub use message::{ChatMessage, MessageMetadata, NewMessage, PlaceRef, SenderKind};
pub use profile::UserProfile;
pub use session::ChatSession;
