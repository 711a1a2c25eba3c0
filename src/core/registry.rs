use crate::core::filters::{FuelTech, UnitStatus};

/// Fixed mapping from the user-facing fuel-type category labels to the leaf
/// keys each one controls. Labels are matched case-insensitively; a miss
/// returns `None` and is the caller's to report.
pub fn fueltech_category(label: &str) -> Option<&'static [FuelTech]> {
    let keys: &'static [FuelTech] = match label.to_lowercase().as_str() {
        "coal" => &[FuelTech::CoalBlack, FuelTech::CoalBrown],
        "gas" => &[
            FuelTech::GasCcgt,
            FuelTech::GasOcgt,
            FuelTech::GasRecip,
            FuelTech::GasSteam,
            FuelTech::GasWcmg,
        ],
        "solar" => &[
            FuelTech::SolarRooftop,
            FuelTech::SolarThermal,
            FuelTech::SolarUtility,
        ],
        "wind" => &[FuelTech::Wind, FuelTech::WindOffshore],
        "hydro" => &[FuelTech::Hydro],
        "battery" => &[FuelTech::BatteryCharging, FuelTech::BatteryDischarging],
        "distillate" => &[FuelTech::Distillate],
        "bioenergy" => &[FuelTech::BioenergyBiogas, FuelTech::BioenergyBiomass],
        "pumps" => &[FuelTech::Pumps],
        _ => return None,
    };
    Some(keys)
}

/// Status categories map one-to-one onto status leaf keys.
pub fn status_category(label: &str) -> Option<UnitStatus> {
    match label.to_lowercase().as_str() {
        "committed" => Some(UnitStatus::Committed),
        "operating" => Some(UnitStatus::Operating),
        "retired" => Some(UnitStatus::Retired),
        _ => None,
    }
}

/// The nine fuel-type category labels, in menu order.
pub const FUELTECH_CATEGORIES: [&str; 9] = [
    "Coal",
    "Gas",
    "Solar",
    "Wind",
    "Hydro",
    "Battery",
    "Distillate",
    "Bioenergy",
    "Pumps",
];

/// The three status category labels.
pub const STATUS_CATEGORIES: [&str; 3] = ["Committed", "Operating", "Retired"];
