pub mod api;

pub use api::{spawn_fetch, ApiFacilitySource, FetchHandle};
