pub mod client;
pub mod providers;
pub mod time;

pub use client::{CricketApiError, QueryValue, RapidApiClient, RapidRequest};
pub use providers::{fetch_live_matches, fetch_match_detail, fetch_upcoming_matches};
pub use time::{format_time, TimeFormatter};
