use super::*;

#[test]
fn parses_header_and_typed_cells() {
    let text = "shape,a,b,z\nblob,1,5,0.5\nstroke,,x,1\n";
    let ds = parse_csv_str(text).unwrap();
    assert_eq!(ds.rows.len(), 2);
    assert_eq!(ds.source_text, text);

    let r0 = &ds.rows[0];
    assert_eq!(r0.get("shape"), Some(&RawValue::Text("blob".to_string())));
    assert_eq!(r0.get("a"), Some(&RawValue::Number(1.0)));
    assert_eq!(r0.get("z"), Some(&RawValue::Number(0.5)));

    let r1 = &ds.rows[1];
    assert_eq!(r1.get("a"), Some(&RawValue::Empty));
    assert_eq!(r1.get("b"), Some(&RawValue::Text("x".to_string())));
}

#[test]
fn quoted_fields_keep_commas() {
    let ds = parse_csv_str("name,v\n\"a, b\",2\n").unwrap();
    assert_eq!(
        ds.rows[0].get("name"),
        Some(&RawValue::Text("a, b".to_string()))
    );
}

#[test]
fn field_order_follows_header() {
    let ds = parse_csv_str("c,a,b\n1,2,3\n").unwrap();
    let names: Vec<&str> = ds.rows[0].fields().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn ragged_record_is_an_input_error() {
    let err = parse_csv_str("a,b\n1,2\n3\n").unwrap_err();
    assert!(err.to_string().contains("input error:"));
}

#[test]
fn missing_file_is_an_input_error() {
    let err = read_csv_path(Path::new("target/definitely/missing.csv")).unwrap_err();
    assert!(matches!(err, DatapaintError::Input(_)));
}

#[test]
fn header_only_yields_no_rows() {
    let ds = parse_csv_str("a,b\n").unwrap();
    assert!(ds.rows.is_empty());
}
