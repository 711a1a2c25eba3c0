use crate::core::registry;

/// Fuel-technology leaf keys. This is the complete vocabulary of the
/// fueltech filter dimension; the set is fixed at compile time and only the
/// enabled/disabled values move at runtime.
///
/// `Nuclear` and `Interconnector` are reachable by no category label, so no
/// control ever enables them. They are kept because the upstream vocabulary
/// has them, and a permanently-disabled key never constrains filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelTech {
    BatteryCharging,
    BatteryDischarging,
    BioenergyBiogas,
    BioenergyBiomass,
    CoalBlack,
    CoalBrown,
    Distillate,
    GasCcgt,
    GasOcgt,
    GasRecip,
    GasSteam,
    GasWcmg,
    Hydro,
    Pumps,
    SolarRooftop,
    SolarThermal,
    SolarUtility,
    Nuclear,
    Wind,
    WindOffshore,
    Interconnector,
}

impl FuelTech {
    pub const ALL: [FuelTech; 21] = [
        FuelTech::BatteryCharging,
        FuelTech::BatteryDischarging,
        FuelTech::BioenergyBiogas,
        FuelTech::BioenergyBiomass,
        FuelTech::CoalBlack,
        FuelTech::CoalBrown,
        FuelTech::Distillate,
        FuelTech::GasCcgt,
        FuelTech::GasOcgt,
        FuelTech::GasRecip,
        FuelTech::GasSteam,
        FuelTech::GasWcmg,
        FuelTech::Hydro,
        FuelTech::Pumps,
        FuelTech::SolarRooftop,
        FuelTech::SolarThermal,
        FuelTech::SolarUtility,
        FuelTech::Nuclear,
        FuelTech::Wind,
        FuelTech::WindOffshore,
        FuelTech::Interconnector,
    ];

    /// The wire identifier carried in `FacilityUnit::fueltech_id`.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelTech::BatteryCharging => "battery_charging",
            FuelTech::BatteryDischarging => "battery_discharging",
            FuelTech::BioenergyBiogas => "bioenergy_biogas",
            FuelTech::BioenergyBiomass => "bioenergy_biomass",
            FuelTech::CoalBlack => "coal_black",
            FuelTech::CoalBrown => "coal_brown",
            FuelTech::Distillate => "distillate",
            FuelTech::GasCcgt => "gas_ccgt",
            FuelTech::GasOcgt => "gas_ocgt",
            FuelTech::GasRecip => "gas_recip",
            FuelTech::GasSteam => "gas_steam",
            FuelTech::GasWcmg => "gas_wcmg",
            FuelTech::Hydro => "hydro",
            FuelTech::Pumps => "pumps",
            FuelTech::SolarRooftop => "solar_rooftop",
            FuelTech::SolarThermal => "solar_thermal",
            FuelTech::SolarUtility => "solar_utility",
            FuelTech::Nuclear => "nuclear",
            FuelTech::Wind => "wind",
            FuelTech::WindOffshore => "wind_offshore",
            FuelTech::Interconnector => "interconnector",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Operational status leaf keys for the status filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    Committed,
    Operating,
    Retired,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 3] = [
        UnitStatus::Committed,
        UnitStatus::Operating,
        UnitStatus::Retired,
    ];

    /// The wire identifier carried in `FacilityUnit::status_id`.
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Committed => "committed",
            UnitStatus::Operating => "operating",
            UnitStatus::Retired => "retired",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Enabled/disabled flags for the fueltech dimension, one slot per leaf key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FueltechFilter {
    enabled: [bool; FuelTech::ALL.len()],
}

impl FueltechFilter {
    pub fn is_enabled(&self, key: FuelTech) -> bool {
        self.enabled[key.index()]
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|&v| v)
    }

    pub fn with_key(mut self, key: FuelTech, enabled: bool) -> Self {
        self.enabled[key.index()] = enabled;
        self
    }

    pub fn enabled_keys(&self) -> impl Iterator<Item = FuelTech> + '_ {
        FuelTech::ALL.into_iter().filter(|k| self.is_enabled(*k))
    }
}

/// Enabled/disabled flags for the status dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFilter {
    enabled: [bool; UnitStatus::ALL.len()],
}

impl StatusFilter {
    pub fn is_enabled(&self, key: UnitStatus) -> bool {
        self.enabled[key.index()]
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|&v| v)
    }

    pub fn with_key(mut self, key: UnitStatus, enabled: bool) -> Self {
        self.enabled[key.index()] = enabled;
        self
    }

    pub fn enabled_keys(&self) -> impl Iterator<Item = UnitStatus> + '_ {
        UnitStatus::ALL.into_iter().filter(|k| self.is_enabled(*k))
    }
}

/// The complete filter selection: both dimensions together. Value semantics
/// throughout: every toggle returns a new state and never mutates the old
/// one, so callers can hold on to earlier states freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub fueltech: FueltechFilter,
    pub status: StatusFilter,
}

impl FilterState {
    /// Expands a fuel-type category label ("Coal", "Gas", ...) and sets every
    /// leaf key it covers to `enabled`. Unknown labels are logged and leave
    /// the state untouched.
    pub fn set_fueltech_category(self, label: &str, enabled: bool) -> Self {
        let Some(keys) = registry::fueltech_category(label) else {
            tracing::warn!("unknown fuel-type category: {}", label);
            return self;
        };

        let mut fueltech = self.fueltech;
        for &key in keys {
            fueltech = fueltech.with_key(key, enabled);
        }
        Self { fueltech, ..self }
    }

    /// Sets a single status leaf key, matched case-insensitively against the
    /// category label. Unknown labels are logged and leave the state untouched.
    pub fn set_status_category(self, label: &str, enabled: bool) -> Self {
        let Some(key) = registry::status_category(label) else {
            tracing::warn!("unknown status category: {}", label);
            return self;
        };

        Self {
            status: self.status.with_key(key, enabled),
            ..self
        }
    }
}
