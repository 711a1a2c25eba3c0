pub mod model;
pub mod ports;

pub use model::{Facility, FacilityUnit};
pub use ports::{ConfigProvider, FacilitySource};
