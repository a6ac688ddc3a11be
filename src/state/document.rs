//! Wire types exchanged with the document-generation backend

use crate::i18n::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// The backend omits empty lists and details as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `POST /product/generate-docs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub company_name: String,
    pub product_name: String,
    pub product_category: String,
    pub target_country: String,
    pub product_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Response envelope returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<GeneratedDocument>,
}

/// A single compliance checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub status: String,
}

/// Regulations of the target country or region
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationDetails {
    pub country_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_regulations: Vec<String>,
    pub customs_requirements: String,
    pub import_restrictions: String,
}

/// The structured document returned on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub document_content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_certs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compliance_items: Vec<ComplianceItem>,
    pub estimated_time: String,
    pub estimated_cost: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regulation_details: RegulationDetails,
}
