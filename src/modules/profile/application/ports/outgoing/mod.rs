pub mod profile_gateway;

pub use profile_gateway::{ImageChange, ImageUpload, OwnerProfileData, ProfileGateway};
