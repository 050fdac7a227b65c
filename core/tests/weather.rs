//! Weather input contract: the OWM-shaped parser and the validated
//! constructor fail loudly instead of guessing defaults.

use serde_json::json;
use solarfield_core::error::SimError;
use solarfield_core::weather::WeatherReading;

/// A complete current-conditions document for a UTC+3 station.
/// Sunrise 03:30 UTC = 06:30 local, sunset 14:45 UTC = 17:45 local.
fn full_document() -> serde_json::Value {
    json!({
        "main": { "temp": 26.4, "humidity": 58 },
        "clouds": { "all": 40 },
        "sys": { "sunrise": 1_702_092_600i64, "sunset": 1_702_133_100i64 },
        "timezone": 10_800
    })
}

#[test]
fn full_document_parses() {
    let reading = WeatherReading::from_owm_json(&full_document()).unwrap();

    assert_eq!(reading.temperature_c, 26.4);
    assert_eq!(reading.humidity_pct, 58.0);
    assert_eq!(reading.cloud_pct, 40.0);
    assert_eq!(reading.sunrise_hour, 6);
    assert_eq!(reading.sunset_hour, 17);
}

#[test]
fn each_missing_field_is_reported_by_name() {
    let cases: [(&[&str], &str); 6] = [
        (&["main", "temp"], "main.temp"),
        (&["main", "humidity"], "main.humidity"),
        (&["clouds", "all"], "clouds.all"),
        (&["sys", "sunrise"], "sys.sunrise"),
        (&["sys", "sunset"], "sys.sunset"),
        (&["timezone"], "timezone"),
    ];

    for (path, expected) in cases {
        let mut doc = full_document();
        let parent = path[..path.len() - 1]
            .iter()
            .fold(&mut doc, |v, key| v.get_mut(*key).unwrap());
        parent
            .as_object_mut()
            .unwrap()
            .remove(path[path.len() - 1]);

        match WeatherReading::from_owm_json(&doc) {
            Err(SimError::MalformedReading { field }) => assert_eq!(field, expected),
            other => panic!("Expected MalformedReading for '{expected}', got {other:?}"),
        }
    }
}

#[test]
fn out_of_range_cloud_cover_is_rejected() {
    let mut doc = full_document();
    doc["clouds"]["all"] = json!(150);

    match WeatherReading::from_owm_json(&doc) {
        Err(SimError::ReadingOutOfRange { field, value }) => {
            assert_eq!(field, "clouds.all");
            assert_eq!(value, 150.0);
        }
        other => panic!("Expected ReadingOutOfRange, got {other:?}"),
    }
}

#[test]
fn constructor_rejects_impossible_hours() {
    assert!(matches!(
        WeatherReading::new(20.0, 50.0, 10.0, 24, 19),
        Err(SimError::ReadingOutOfRange { field: "sunrise_hour", .. })
    ));
    assert!(matches!(
        WeatherReading::new(20.0, 50.0, 10.0, 6, 99),
        Err(SimError::ReadingOutOfRange { field: "sunset_hour", .. })
    ));
}

#[test]
fn constructor_accepts_boundary_values() {
    assert!(WeatherReading::new(-10.0, 0.0, 0.0, 0, 23).is_ok());
    assert!(WeatherReading::new(45.0, 100.0, 100.0, 23, 0).is_ok());
}
