use super::*;

#[test]
fn decodes_all_known_variants() {
    let json = r#"[
        { "type": "text", "props": { "variant": "heading", "content": "Hi", "align": "center" } },
        { "type": "chart", "props": { "chartType": "bar", "title": "T", "data": [], "xKey": "x", "yKey": "y" } },
        { "type": "table", "props": { "headers": ["A"], "rows": [["1"]] } },
        { "type": "card", "props": { "title": "C", "content": "body" } }
    ]"#;
    let items: Vec<ComponentItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 4);
    assert!(matches!(items[0], ComponentItem::Text(_)));
    assert!(matches!(items[1], ComponentItem::Chart(_)));
    assert!(matches!(items[2], ComponentItem::Table(_)));
    assert!(matches!(items[3], ComponentItem::Card(_)));
}

#[test]
fn unknown_tag_decodes_to_unknown_instead_of_failing() {
    let json = r#"[
        { "type": "card", "props": { "title": "C", "content": "body" } },
        { "type": "bogus", "props": { "whatever": 1 } }
    ]"#;
    let items: Vec<ComponentItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1], ComponentItem::Unknown);
}

#[test]
fn text_align_defaults_to_left() {
    let json = r#"{ "type": "text", "props": { "variant": "paragraph", "content": "p" } }"#;
    let item: ComponentItem = serde_json::from_str(json).unwrap();
    let ComponentItem::Text(props) = item else {
        panic!("expected Text item");
    };
    assert_eq!(props.align, Align::Left);
}

#[test]
fn unknown_text_variant_decodes_to_other() {
    let json = r#"{ "type": "text", "props": { "variant": "fancy", "content": "p" } }"#;
    let item: ComponentItem = serde_json::from_str(json).unwrap();
    let ComponentItem::Text(props) = item else {
        panic!("expected Text item");
    };
    assert_eq!(props.variant, TextVariant::Other);
}

#[test]
fn table_toggles_default_off() {
    let json = r#"{ "type": "table", "props": { "headers": [], "rows": [] } }"#;
    let item: ComponentItem = serde_json::from_str(json).unwrap();
    let ComponentItem::Table(props) = item else {
        panic!("expected Table item");
    };
    assert!(!props.striped);
    assert!(!props.hoverable);
}

#[test]
fn card_optional_fields_may_be_absent() {
    let json = r#"{ "type": "card", "props": { "title": "C", "content": "body" } }"#;
    let item: ComponentItem = serde_json::from_str(json).unwrap();
    let ComponentItem::Card(props) = item else {
        panic!("expected Card item");
    };
    assert_eq!(props.subtitle, None);
    assert_eq!(props.image, None);
}

#[test]
fn chart_props_use_camel_case_keys() {
    let json = r#"{
        "type": "chart",
        "props": {
            "chartType": "line",
            "title": "Sales",
            "data": [{ "month": "Jan", "sales": 3 }],
            "xKey": "month",
            "yKey": "sales"
        }
    }"#;
    let item: ComponentItem = serde_json::from_str(json).unwrap();
    let ComponentItem::Chart(props) = item else {
        panic!("expected Chart item");
    };
    assert_eq!(props.chart_type, "line");
    assert_eq!(props.x_key, "month");
    assert_eq!(props.y_key, "sales");
}

#[test]
fn parse_layout_accepts_a_list_with_unknown_entries() {
    let items = parse_layout(r#"[{ "type": "mystery" }]"#).unwrap();
    assert_eq!(items, vec![ComponentItem::Unknown]);
}

#[test]
fn parse_layout_rejects_malformed_json() {
    assert!(matches!(
        parse_layout("not json at all"),
        Err(SchemaError::Decode(_))
    ));
}

#[test]
fn known_variants_round_trip() {
    let item = ComponentItem::Card(CardProps {
        title: "T".to_owned(),
        subtitle: Some("S".to_owned()),
        image: None,
        content: "body".to_owned(),
    });
    let json = serde_json::to_string(&item).unwrap();
    assert!(json.contains(r#""type":"card""#));
    let back: ComponentItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}
