use super::*;

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn remote_error_displays_backend_message_verbatim() {
    let err = BackendError::remote(400, "Invalid login credentials");
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn order_terms_cover_null_placement() {
    let desc_last = Order { column: "created_at".to_owned(), ascending: false, nulls_first: Some(false) };
    let asc_first = Order { column: "id".to_owned(), ascending: true, nulls_first: Some(true) };
    let plain = Order { column: "id".to_owned(), ascending: false, nulls_first: None };
    assert_eq!(desc_last.to_term(), "created_at.desc.nullslast");
    assert_eq!(asc_first.to_term(), "id.asc.nullsfirst");
    assert_eq!(plain.to_term(), "id.desc");
}

#[test]
fn select_defaults_to_all_columns() {
    assert_eq!(Select::from("blogs").to_params(), params(&[("select", "*")]));
}

#[test]
fn select_with_order_and_range_maps_to_offset_limit() {
    let query = Select::from("blogs")
        .columns("id,title")
        .order("created_at", false, Some(false))
        .order("id", false, None)
        .range(5, 9);
    assert_eq!(
        query.to_params(),
        params(&[
            ("select", "id,title"),
            ("order", "created_at.desc.nullslast,id.desc"),
            ("offset", "5"),
            ("limit", "5"),
        ])
    );
}

#[test]
fn select_filters_use_eq_operator() {
    let query = Select::from("comments").eq("blog_id", "b-1");
    assert_eq!(query.to_params(), params(&[("select", "*"), ("blog_id", "eq.b-1")]));
}

#[test]
fn inverted_range_requests_no_rows() {
    let query = Select::from("blogs").range(4, 2);
    assert!(query.to_params().contains(&("limit".to_owned(), "0".to_owned())));
}

#[test]
fn decode_single_errors_on_empty_result() {
    let result = decode_single::<crate::net::types::Post>(Vec::new());
    assert!(matches!(result, Err(BackendError::Decode(_))));
}

#[test]
fn decode_rows_reports_shape_mismatch() {
    let rows = vec![serde_json::json!({ "id": 1 })];
    let result = decode_rows::<crate::net::types::Post>(rows);
    assert!(matches!(result, Err(BackendError::Decode(_))));
}
