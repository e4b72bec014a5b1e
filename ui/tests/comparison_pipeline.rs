//! End-to-end check of the view-model pipeline behind the comparison modal:
//! payload decoding, client-side classification, and fixed-precision
//! formatting, without a rendering environment.

use std::collections::HashMap;

use ui::core::classify::{classify, Category};
use ui::core::site::SiteRecord;
use ui::dashboard::{comparison_entries, to_delimited_text, ExportRow};

fn comparison_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "site_id": "S1",
            "site_name": "Bosque Norte",
            "EHI": 0.8123,
            "TFI": 0.71,
            "BI": 0.9034,
            "VSI": 0.78,
            "color": "#22c55e",
            "categoria": "Excelente"
        },
        {
            "site_id": "S2",
            "site_name": "Humedal Sur",
            "EHI": 0.44,
            "TFI": 0.39,
            "BI": 0.52,
            "VSI": 0.41,
            "color": "#f97316",
            "categoria": "Regular"
        },
        {
            "site_id": "S3",
            "site_name": "Zona Minera",
            "EHI": null,
            "TFI": null,
            "BI": null,
            "VSI": null
        }
    ])
}

#[test]
fn payload_rows_become_classified_formatted_entries() {
    let records: Vec<SiteRecord> =
        serde_json::from_value(comparison_payload()).expect("payload decodes");
    let entries = comparison_entries(&records);

    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].site_name, "Bosque Norte");
    assert_eq!(entries[0].ehi_display, "0.8123");
    assert_eq!(entries[0].ehi_color, "#22c55e");
    assert_eq!(entries[0].category_label, "Excelente");
    assert_eq!(entries[0].bi_display, "0.903");

    assert_eq!(entries[1].category_label, "Regular");
    assert_eq!(entries[1].ehi_color, "#f97316");

    // A site without computed results renders sentinels, not a bracket.
    assert_eq!(entries[2].ehi_display, "--");
    assert_eq!(entries[2].category_label, "--");
}

#[test]
fn client_classification_agrees_with_server_fields() {
    // The server sends `color`/`categoria` alongside each score; the client
    // recomputes them. Both tables must agree on real data.
    let records: Vec<SiteRecord> =
        serde_json::from_value(comparison_payload()).expect("payload decodes");

    for record in records.iter().filter(|r| r.ehi.is_some()) {
        let classification = record.ehi.and_then(classify).expect("finite score");
        assert_eq!(Some(classification.color), record.color.as_deref());
        assert_eq!(
            Some(classification.category.label()),
            record.categoria.as_deref()
        );
    }
}

#[test]
fn category_counts_round_trip_through_labels() {
    // The stats breakdown indexes server counts by label; every enum label
    // must therefore be usable as a map key and back.
    let mut counts: HashMap<String, u32> = HashMap::new();
    for (index, category) in Category::ALL.into_iter().enumerate() {
        counts.insert(category.label().to_string(), index as u32);
    }
    for category in Category::ALL {
        assert!(counts.contains_key(category.label()));
    }
}

#[test]
fn dataset_rows_export_in_server_column_order() {
    let rows: Vec<ExportRow> = serde_json::from_value(serde_json::json!([
        { "site_id": "S1", "site_name": "Bosque, Norte", "EHI": 0.81 },
        { "site_id": "S2", "site_name": "Humedal Sur", "EHI": 0.44 }
    ]))
    .expect("rows decode");

    let csv = to_delimited_text(&rows);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("site_id,site_name,EHI"));
    assert_eq!(lines.next(), Some("S1,\"Bosque, Norte\",0.81"));
    assert_eq!(lines.next(), Some("S2,Humedal Sur,0.44"));
    assert_eq!(lines.next(), None);
}
