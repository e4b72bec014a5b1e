//! Payload types for the EcoBalance HTTP API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One site as returned by the dataset and comparison endpoints.
///
/// Index fields are optional: a site whose results have not been computed yet
/// serializes them as null. The uppercase field names are the server's; the
/// lowercase aliases absorb rows that come straight from the results sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    #[serde(default)]
    pub site_id: String,
    pub site_name: String,
    #[serde(rename = "EHI", alias = "ehi", default)]
    pub ehi: Option<f64>,
    #[serde(rename = "TFI", alias = "tfi", default)]
    pub tfi: Option<f64>,
    #[serde(rename = "BI", alias = "bi", default)]
    pub bi: Option<f64>,
    #[serde(rename = "VSI", alias = "vsi", default)]
    pub vsi: Option<f64>,
    /// Server-side classification. Deserialized for completeness but never
    /// rendered; the client recomputes both fields from the raw score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

/// Aggregate figures from the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemStats {
    pub total_sitios: u32,
    pub ehi_promedio: f64,
    pub ehi_max: f64,
    pub ehi_min: f64,
    #[serde(default)]
    pub por_categoria: HashMap<String, u32>,
    pub bi_promedio: f64,
    pub tfi_promedio: f64,
    pub vsi_promedio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_uppercase_index_fields() {
        let record: SiteRecord = serde_json::from_value(serde_json::json!({
            "site_id": "S1",
            "site_name": "Bosque Norte",
            "EHI": 0.82,
            "TFI": 0.7,
            "BI": 0.9,
            "VSI": 0.8,
            "color": "#22c55e",
            "categoria": "Excelente"
        }))
        .expect("valid record");
        assert_eq!(record.ehi, Some(0.82));
        assert_eq!(record.categoria.as_deref(), Some("Excelente"));
    }

    #[test]
    fn missing_indices_decode_as_none() {
        let record: SiteRecord = serde_json::from_value(serde_json::json!({
            "site_id": "S2",
            "site_name": "Humedal Sur",
            "EHI": null
        }))
        .expect("valid record");
        assert_eq!(record.ehi, None);
        assert_eq!(record.tfi, None);
        assert!(record.categoria.is_none());
    }

    #[test]
    fn lowercase_aliases_are_accepted() {
        let record: SiteRecord = serde_json::from_value(serde_json::json!({
            "site_id": "S3",
            "site_name": "Zona Minera",
            "ehi": 0.05
        }))
        .expect("valid record");
        assert_eq!(record.ehi, Some(0.05));
    }
}
