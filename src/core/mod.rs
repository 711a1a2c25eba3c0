pub mod browser;
pub mod filters;
pub mod paginator;
pub mod predicate;
pub mod registry;

pub use crate::domain::model::{Facility, FacilityUnit};
pub use crate::domain::ports::{ConfigProvider, FacilitySource};
pub use crate::utils::error::Result;
pub use browser::{FacilityBrowser, PageView, DEFAULT_PAGE_SIZE};
pub use filters::{FilterState, FuelTech, FueltechFilter, StatusFilter, UnitStatus};
pub use paginator::Direction;
pub use predicate::filter_facilities;
