use nuwe_calendar::{Date, DatePattern};
use nuwe_index::{build_index, DateValueRecord, TimeRangeConfig, SENTINEL};

#[test]
fn json_records_overlay_a_two_year_span() {
    let records: Vec<DateValueRecord> = serde_json::from_str(
        r#"[
            { "date": "2016-01-01", "value": 0.0 },
            { "date": "2016-02-29", "value": 0.42 },
            { "date": "2017-12-31", "value": 1.0 },
            { "date": "2016-01-01", "value": 3.0 }
        ]"#,
    )
    .unwrap();
    let range: TimeRangeConfig =
        serde_json::from_str(r#"{ "type": "range", "start": 2016, "stop": 2018 }"#).unwrap();
    let pattern = DatePattern::parse_pattern("YYYY-MM-DD").unwrap();

    let index = build_index(&range, &records, &pattern).unwrap();

    assert_eq!(index.len(), 366 + 365);
    assert_eq!(index[&Date::new(2016, 1, 1).unwrap()], 3.0);
    assert_eq!(index[&Date::new(2016, 2, 29).unwrap()], 0.42);
    assert_eq!(index[&Date::new(2017, 12, 31).unwrap()], 1.0);
    assert_eq!(index[&Date::new(2016, 7, 4).unwrap()], SENTINEL);

    let with_data = index.values().filter(|&&v| v != SENTINEL).count();
    assert_eq!(with_data, 3);
}
