mod auth;
mod trackfile;

pub use auth::TokenManager;
pub use trackfile::TrackfileError;
pub use trackfile::TrackfileManager;
