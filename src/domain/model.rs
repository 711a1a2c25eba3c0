use serde::{Deserialize, Serialize};

/// A power-generation site as returned by the facilities API.
///
/// `units` keeps the order the API delivered; the browser never reorders it.
/// `description` may carry markup and is passed through untouched; rendering
/// it safely is the presentation layer's problem, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub code: String,
    pub name: String,
    pub network_id: String,
    pub network_region: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub units: Vec<FacilityUnit>,
}

/// A single generating or storage unit within a facility.
///
/// `fueltech_id` and `status_id` stay as raw strings here: the API owns the
/// vocabulary and this layer does not validate records. The filter side works
/// with closed key enums and compares against these strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityUnit {
    pub code: String,
    pub fueltech_id: String,
    pub status_id: String,
    #[serde(default)]
    pub emissions_factor_co2: f64,
    #[serde(default)]
    pub data_first_seen: String,
    #[serde(default)]
    pub data_last_seen: String,
    #[serde(default)]
    pub dispatch_type: String,
    #[serde(default)]
    pub capacity_registered: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_facility_with_nested_units() {
        let json = serde_json::json!({
            "code": "BAYSW",
            "name": "Bayswater",
            "network_id": "NEM",
            "network_region": "NSW1",
            "description": "<p>Coal-fired station</p>",
            "units": [{
                "code": "BW01",
                "fueltech_id": "coal_black",
                "status_id": "operating",
                "emissions_factor_co2": 0.88,
                "data_first_seen": "1998-12-01",
                "data_last_seen": "2024-06-01",
                "dispatch_type": "GENERATOR",
                "capacity_registered": 660.0
            }]
        });

        let facility: Facility = serde_json::from_value(json).unwrap();
        assert_eq!(facility.code, "BAYSW");
        assert_eq!(facility.units.len(), 1);
        assert_eq!(facility.units[0].fueltech_id, "coal_black");
        assert_eq!(facility.units[0].capacity_registered, 660.0);
    }

    #[test]
    fn deserializes_facility_without_units() {
        let json = serde_json::json!({
            "code": "EMPTY1",
            "name": "No Units Yet",
            "network_id": "NEM",
            "network_region": "VIC1"
        });

        let facility: Facility = serde_json::from_value(json).unwrap();
        assert!(facility.units.is_empty());
        assert!(facility.description.is_empty());
    }
}
