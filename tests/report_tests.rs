use astar_engine::report::{format_cost, format_json, format_text, parse_cost, write_report, ReportFormat};
use astar_engine::{SearchResult, SearchStats};

fn sample(cost: f64) -> SearchResult {
    SearchResult {
        path: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        cost,
        stats: SearchStats {
            expanded: 3,
            relaxed: 3,
            pushed: 4,
            stale_discarded: 0,
        },
    }
}

#[test]
fn test_text_report_layout() {
    assert_eq!(format_text(&sample(3.0)), "COST 3.0\nPATH A B C\n");
}

#[test]
fn test_cost_formatting() {
    assert_eq!(format_cost(0.0), "0.0");
    assert_eq!(format_cost(3.0), "3.0");
    assert_eq!(format_cost(2.5), "2.5");
    assert_eq!(format_cost(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_cost(1e15), "1000000000000000.0");
    assert_eq!(format_cost(2e16), "20000000000000000.0");
    assert_eq!(format_cost(f64::INFINITY), "inf");
}

#[test]
fn test_large_and_infinite_costs_parse_back() {
    for cost in [1e15, 2e16, 9007199254740993.0, f64::MAX, f64::INFINITY] {
        let text = format_text(&sample(cost));
        let line = text.lines().next().unwrap();
        assert!(!line.contains('e'), "no exponent in {:?}", line);
        assert_eq!(parse_cost(&text), Some(cost));
    }
}

#[test]
fn test_cost_line_parses_back_exactly() {
    for cost in [0.0, 3.0, 1.0 / 3.0, 12345.678, 1e-7, 0.1 + 0.2] {
        let text = format_text(&sample(cost));
        assert!(text.starts_with("COST "));
        assert_eq!(parse_cost(&text), Some(cost));
    }
}

#[test]
fn test_parse_cost_ignores_other_lines() {
    assert_eq!(parse_cost("noise\nCOST 7.25\nPATH x\n"), Some(7.25));
    assert_eq!(parse_cost("COSTLY 1\n"), None);
    assert_eq!(parse_cost(""), None);
}

#[test]
fn test_json_report() {
    let json = format_json(&sample(3.0), "manhattan").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["cost"], 3.0);
    assert_eq!(value["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(value["heuristic"], "manhattan");
    assert_eq!(value["stats"]["expanded"], 3);
    assert_eq!(value["stats"]["pushed"], 4);
}

#[test]
fn test_write_report_formats() {
    let mut text = Vec::new();
    write_report(&mut text, &sample(1.5), "zero", ReportFormat::Text).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), "COST 1.5\nPATH A B C\n");

    let mut json = Vec::new();
    write_report(&mut json, &sample(1.5), "zero", ReportFormat::Json).unwrap();
    let json = String::from_utf8(json).unwrap();
    assert!(json.ends_with('\n'));
    assert_eq!(json.lines().count(), 1);
}
