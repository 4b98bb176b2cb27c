mod countdown;

pub use countdown::TokioCountdown;
