mod onboarding_api;

pub use onboarding_api::HttpOnboardingApi;
