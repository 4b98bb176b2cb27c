pub mod credentials;
pub mod http;
pub mod time;

pub use credentials::{FileAccessTokenStore, MemoryOnboardingTokenStore};
pub use http::HttpOnboardingApi;
pub use time::TokioCountdown;
