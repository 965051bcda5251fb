//! End-to-end advisory generation against provider-shaped payloads.

use agro_core::parse_rules;
use agro_eval::{advise, Observation, PresentationType};

const RULES: &str = r#"{
    "rules": [
        {
            "id": "heat_stress",
            "severity": "danger",
            "title": "Heat Stress Risk",
            "message": "Irrigate in the early morning and shade sensitive crops.",
            "conditions": [
                { "variable": "temperature_c", "operator": "gt", "value": 38 }
            ]
        },
        {
            "id": "high_wind_spray",
            "severity": "warning",
            "title": "High Winds",
            "message": "Postpone pesticide spraying; drift risk is high.",
            "conditions": [
                { "variable": "wind_kmph", "operator": "gt", "value": 30 }
            ]
        },
        {
            "id": "thunderstorm",
            "severity": "alert",
            "title": "Thunderstorm Activity",
            "message": "Keep workers and livestock out of open fields.",
            "conditions": [
                { "variable": "prob_thunderstorm", "operator": "gte", "value": 1 }
            ]
        },
        {
            "id": "waterlogging",
            "severity": "warning",
            "title": "Waterlogging Risk",
            "message": "Clear drainage channels before the rain arrives.",
            "icon": "CloudRain",
            "conditions": [
                { "variable": "rainfall_48h_mm", "operator": "gte", "value": 40 }
            ]
        }
    ]
}"#;

fn observation(json: serde_json::Value) -> Observation {
    serde_json::from_value(json).unwrap()
}

#[test]
fn stormy_day_triggers_wind_and_thunderstorm_rules() {
    let rules = parse_rules(RULES).unwrap();
    let obs = observation(serde_json::json!({
        "current": {
            "name": "Nagpur",
            "sys": { "country": "IN" },
            "main": { "temp": 29.0, "humidity": 80, "pressure": 1002 },
            "wind": { "speed": 10.0 },
            "visibility": 7000,
            "weather": [ { "id": 211, "main": "Thunderstorm" } ]
        }
    }));

    let advisories = advise(&rules, &obs);
    assert_eq!(advisories.len(), 2);

    // wind.speed 10 m/s -> 36 km/h, above the 30 km/h threshold.
    assert_eq!(advisories[0].title, "High Winds");
    assert_eq!(advisories[0].kind, PresentationType::Warning);

    // alert severity renders as danger with the Warning default icon.
    assert_eq!(advisories[1].title, "Thunderstorm Activity");
    assert_eq!(advisories[1].kind, PresentationType::Danger);
    assert_eq!(advisories[1].icon, "Warning");
}

#[test]
fn forecast_rain_drives_waterlogging_rule() {
    let rules = parse_rules(RULES).unwrap();
    let slices: Vec<serde_json::Value> = (0..16)
        .map(|i| serde_json::json!({ "dt": 1756100000 + i * 10800, "rain": { "3h": 3.0 } }))
        .collect();
    let obs = observation(serde_json::json!({
        "current": {
            "main": { "temp": 24.0, "humidity": 88 },
            "wind": { "speed": 2.0 },
            "weather": [ { "id": 500, "main": "Rain" } ]
        },
        "forecast": { "list": slices }
    }));

    let advisories = advise(&rules, &obs);
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].title, "Waterlogging Risk");
    assert_eq!(advisories[0].icon, "CloudRain");
}

#[test]
fn calm_day_yields_single_all_clear() {
    let rules = parse_rules(RULES).unwrap();
    let obs = observation(serde_json::json!({
        "current": {
            "main": { "temp": 22.0, "humidity": 50 },
            "wind": { "speed": 2.0 },
            "visibility": 10000,
            "weather": [ { "id": 800, "main": "Clear" } ]
        }
    }));

    let advisories = advise(&rules, &obs);
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, PresentationType::Success);
    assert_eq!(advisories[0].icon, "Plant");

    // Same input, same output.
    assert_eq!(advise(&rules, &obs), advisories);
}

#[test]
fn advisories_serialize_for_the_response_body() {
    let rules = parse_rules(RULES).unwrap();
    let obs = observation(serde_json::json!({
        "current": {
            "main": { "temp": 40.0, "humidity": 20 },
            "wind": { "speed": 1.0 },
            "weather": [ { "id": 800 } ]
        }
    }));

    let advisories = advise(&rules, &obs);
    let json = serde_json::to_value(&advisories).unwrap();
    assert_eq!(json[0]["type"], "danger");
    assert_eq!(json[0]["title"], "Heat Stress Risk");
    // danger severity with no explicit icon.
    assert_eq!(json[0]["icon"], "WarningCircle");
}
