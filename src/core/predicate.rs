use crate::core::filters::FilterState;
use crate::domain::model::Facility;

/// Applies the current filter selection to a facility list, preserving the
/// relative order of matches.
///
/// The match rule per dimension: a dimension with nothing enabled passes
/// every facility (no selection means no constraint); otherwise the facility
/// passes when any enabled leaf key matches the corresponding attribute of
/// any of its units. The two dimension verdicts are then ANDed. A facility
/// with no units can only survive a dimension that has nothing enabled.
pub fn filter_facilities<'a>(facilities: &'a [Facility], state: &FilterState) -> Vec<&'a Facility> {
    facilities
        .iter()
        .filter(|facility| fueltech_match(facility, state) && status_match(facility, state))
        .collect()
}

fn fueltech_match(facility: &Facility, state: &FilterState) -> bool {
    if !state.fueltech.any_enabled() {
        return true;
    }
    state.fueltech.enabled_keys().any(|key| {
        facility
            .units
            .iter()
            .any(|unit| unit.fueltech_id == key.as_str())
    })
}

fn status_match(facility: &Facility, state: &FilterState) -> bool {
    if !state.status.any_enabled() {
        return true;
    }
    state.status.enabled_keys().any(|key| {
        facility
            .units
            .iter()
            .any(|unit| unit.status_id == key.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FacilityUnit;

    fn unit(fueltech: &str, status: &str) -> FacilityUnit {
        FacilityUnit {
            code: format!("{}_U1", fueltech.to_uppercase()),
            fueltech_id: fueltech.to_string(),
            status_id: status.to_string(),
            emissions_factor_co2: 0.0,
            data_first_seen: String::new(),
            data_last_seen: String::new(),
            dispatch_type: "GENERATOR".to_string(),
            capacity_registered: 100.0,
        }
    }

    fn facility(code: &str, units: Vec<FacilityUnit>) -> Facility {
        Facility {
            code: code.to_string(),
            name: code.to_string(),
            network_id: "NEM".to_string(),
            network_region: "NSW1".to_string(),
            description: String::new(),
            units,
        }
    }

    #[test]
    fn no_selection_passes_everything_in_order() {
        let facilities = vec![
            facility("A", vec![unit("coal_black", "operating")]),
            facility("B", vec![]),
            facility("C", vec![unit("wind", "retired")]),
        ];

        let result = filter_facilities(&facilities, &FilterState::default());
        let codes: Vec<&str> = result.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn filtered_output_is_an_ordered_subsequence() {
        let facilities = vec![
            facility("A", vec![unit("hydro", "operating")]),
            facility("B", vec![unit("coal_black", "operating")]),
            facility("C", vec![unit("hydro", "retired")]),
            facility("D", vec![unit("wind", "operating")]),
        ];
        let state = FilterState::default().set_fueltech_category("Hydro", true);

        let result = filter_facilities(&facilities, &state);
        let codes: Vec<&str> = result.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "C"]);
    }

    #[test]
    fn any_matching_unit_suffices_within_a_dimension() {
        let mixed = vec![facility(
            "MIX",
            vec![unit("wind", "operating"), unit("coal_black", "operating")],
        )];

        let battery_only = FilterState::default().set_fueltech_category("Battery", true);
        assert!(filter_facilities(&mixed, &battery_only).is_empty());

        let coal = FilterState::default().set_fueltech_category("Coal", true);
        let result = filter_facilities(&mixed, &coal);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "MIX");
    }

    #[test]
    fn dimensions_are_anded() {
        let facilities = vec![facility("HYD", vec![unit("hydro", "retired")])];

        let hydro = FilterState::default().set_fueltech_category("Hydro", true);
        assert_eq!(filter_facilities(&facilities, &hydro).len(), 1);

        let hydro_operating = hydro.set_status_category("Operating", true);
        assert!(filter_facilities(&facilities, &hydro_operating).is_empty());

        let hydro_retired = hydro.set_status_category("Retired", true);
        assert_eq!(filter_facilities(&facilities, &hydro_retired).len(), 1);
    }

    #[test]
    fn enabled_keys_are_ored_within_a_dimension() {
        let facilities = vec![
            facility("SOL", vec![unit("solar_utility", "operating")]),
            facility("WND", vec![unit("wind", "operating")]),
            facility("COA", vec![unit("coal_brown", "operating")]),
        ];
        let state = FilterState::default()
            .set_fueltech_category("Solar", true)
            .set_fueltech_category("Wind", true);

        let codes: Vec<&str> = filter_facilities(&facilities, &state)
            .iter()
            .map(|f| f.code.as_str())
            .collect();
        assert_eq!(codes, vec!["SOL", "WND"]);
    }

    #[test]
    fn unitless_facility_fails_any_active_dimension() {
        let facilities = vec![facility("EMPTY", vec![])];

        let fueltech = FilterState::default().set_fueltech_category("Coal", true);
        assert!(filter_facilities(&facilities, &fueltech).is_empty());

        let status = FilterState::default().set_status_category("Operating", true);
        assert!(filter_facilities(&facilities, &status).is_empty());

        assert_eq!(
            filter_facilities(&facilities, &FilterState::default()).len(),
            1
        );
    }

    #[test]
    fn status_filter_matches_on_status_id() {
        let facilities = vec![
            facility("OP", vec![unit("gas_ccgt", "operating")]),
            facility("RT", vec![unit("gas_ccgt", "retired")]),
        ];
        let state = FilterState::default().set_status_category("Retired", true);

        let result = filter_facilities(&facilities, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "RT");
    }
}
