pub mod message;
pub mod profile;
pub mod session;

pub use message::MongoMessageRepository;
pub use profile::MongoProfileRepository;
pub use session::MongoSessionRepository;
