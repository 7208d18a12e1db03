pub mod identity;

pub use identity::{stamp_identity, IDENTITY_HEADER, IDENTITY_TOKEN};
