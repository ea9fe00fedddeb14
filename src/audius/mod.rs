pub mod profile;

pub use profile::{AudiusProfileResolver, Profile, ProfileResolver};
