use serde_json::json;

use nuwe_chart::{render, CellFill};

#[test]
fn full_quantize_chart_for_2016() {
    let user = json!({
        "data": { "data": [
            { "date": "2016-01-01", "value": 0.0 },
            { "date": "2016-01-02", "value": 5.0 },
            { "date": "2016-01-02", "value": 1.0 },
            { "date": "2016-02-29", "value": 3.0 }
        ] }
    });

    let chart = render(&user).unwrap();

    assert_eq!(chart.width, 960.0);
    assert_eq!(chart.cell_size, 17.0);
    assert_eq!(chart.panels.len(), 1);

    let panel = &chart.panels[0];
    assert_eq!(panel.year, 2016);
    assert_eq!(panel.cells.len(), 366);
    assert_eq!(panel.outlines.len(), 12);

    // The original transform: ((960 - 17*53)/2, 136 - 17*7 - 1).
    assert_eq!(panel.origin_x, 29.5);
    assert_eq!(panel.origin_y, 16.0);

    // Jan 1: explicit zero activity.
    let jan1 = &panel.cells[0];
    assert_eq!(jan1.key, "2016-01-01");
    assert_eq!(jan1.fill, CellFill::Zero);
    assert_eq!(jan1.tooltip, "2016-01-01: 0.0%");

    // Jan 2: later duplicate record won (1.0, bottom bucket).
    let jan2 = &panel.cells[1];
    assert_eq!(jan2.fill, CellFill::Bucket(0));
    assert_eq!(jan2.tooltip, "2016-01-02: 100.0%");

    // Jan 3 has no record: sentinel, bare tooltip.
    let jan3 = &panel.cells[2];
    assert_eq!(jan3.value, -1.0);
    assert_eq!(jan3.fill, CellFill::NoData);
    assert_eq!(jan3.tooltip, "2016-01-03");

    // Leap day got its record.
    let feb29 = panel.cells.iter().find(|c| c.key == "2016-02-29").unwrap();
    assert_eq!(feb29.fill, CellFill::Bucket(2));

    // Cell pixel positions follow (week, weekday) * cell_size.
    for cell in &panel.cells {
        assert_eq!(cell.x, cell.week as f64 * 17.0);
        assert_eq!(cell.y, cell.weekday as f64 * 17.0);
    }

    // Every outline is closed and scaled into path data.
    for outline in &panel.outlines {
        assert_eq!(outline.vertices.first(), outline.vertices.last());
        assert!(outline.path.starts_with('M'));
        assert!(outline.path.ends_with('Z'));
    }
    assert_eq!(panel.outlines[0].path, "M17,85H0V119H85V17H102V0H17Z");
}

#[test]
fn sequential_chart_uses_special_overrides() {
    let user = json!({
        "data": { "data": [
            { "date": "2016-06-01", "value": 0.5 }
        ] },
        "options": { "scales": { "value": {
            "type": "sequential",
            "domain": [0, 1],
            "range": { "scheme": "greys" },
            "special": [
                { "value": -1, "color": "#eeeeee" },
                { "value": 0, "color": "#ffffff" }
            ]
        } } }
    });

    let chart = render(&user).unwrap();
    let panel = &chart.panels[0];

    let jun1 = panel.cells.iter().find(|c| c.key == "2016-06-01").unwrap();
    assert_eq!(jun1.fill, CellFill::Color("#969696".to_string()));

    // Sentinel days take the special color instead of the gradient end.
    let jan1 = &panel.cells[0];
    assert_eq!(jan1.fill, CellFill::Color("#eeeeee".to_string()));
}

#[test]
fn multi_year_range_produces_one_panel_per_year() {
    let user = json!({
        "options": { "scales": { "time": { "start": 2015, "stop": 2018 } } }
    });
    let chart = render(&user).unwrap();
    let years: Vec<i32> = chart.panels.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2015, 2016, 2017]);
    let cells: Vec<usize> = chart.panels.iter().map(|p| p.cells.len()).collect();
    assert_eq!(cells, vec![365, 366, 365]);
}

#[test]
fn resolved_tree_reflects_user_overrides() {
    let user = json!({
        "options": { "size": { "cell_size": 10 } },
        "renderer_hint": "svg"
    });
    let chart = render(&user).unwrap();
    assert_eq!(chart.cell_size, 10.0);
    assert_eq!(chart.resolved["options"]["size"]["cell_size"], json!(10));
    assert_eq!(chart.resolved["options"]["size"]["width"], json!(960.0));
    // Unknown user keys survive resolution untouched.
    assert_eq!(chart.resolved["renderer_hint"], json!("svg"));
}

#[test]
fn custom_date_scheme_flows_through_keys() {
    let user = json!({
        "data": {
            "scheme": { "date": "DD/MM/YYYY" },
            "data": [{ "date": "05/01/2016", "value": 2.0 }]
        }
    });
    let chart = render(&user).unwrap();
    let cell = chart.panels[0]
        .cells
        .iter()
        .find(|c| c.value == 2.0)
        .unwrap();
    assert_eq!(cell.key, "05/01/2016");
    assert_eq!(cell.fill, CellFill::Bucket(1));
}
