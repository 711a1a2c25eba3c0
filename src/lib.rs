pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{spawn_fetch, ApiFacilitySource, FetchHandle};
pub use config::{BrowserConfig, CliArgs};
pub use core::{FacilityBrowser, FilterState, PageView, DEFAULT_PAGE_SIZE};
pub use domain::{Facility, FacilitySource, FacilityUnit};
pub use utils::error::{BrowserError, Result};
