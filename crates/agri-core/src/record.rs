//! # Survey Record
//!
//! `FarmRecord` is the in-progress (and, once validated, submitted) survey.
//! Every field is a plain `String` holding exactly what was entered; the
//! validator decides what the strings mean.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::FieldName;

/// The 14-field survey record.
///
/// `FarmRecord::default()` is the empty initial record the form starts from
/// and is reset to after a successful submission. Missing keys in a JSON body
/// decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmRecord {
    pub farmer_id: String,
    pub farmer_name: String,
    pub contact_number: String,
    pub survey_number: String,
    pub land_area: String,
    pub soil_type: String,
    pub irrigation_source: String,
    pub crop_season: String,
    pub crop_type: String,
    pub seed_quantity: String,
    pub sowing_date: String,
    pub harvest_date: String,
    pub produce_quantity: String,
    pub fertilizer_used: String,
}

impl FarmRecord {
    /// Read a field by name.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FarmerId => &self.farmer_id,
            FieldName::FarmerName => &self.farmer_name,
            FieldName::ContactNumber => &self.contact_number,
            FieldName::SurveyNumber => &self.survey_number,
            FieldName::LandArea => &self.land_area,
            FieldName::SoilType => &self.soil_type,
            FieldName::IrrigationSource => &self.irrigation_source,
            FieldName::CropSeason => &self.crop_season,
            FieldName::CropType => &self.crop_type,
            FieldName::SeedQuantity => &self.seed_quantity,
            FieldName::SowingDate => &self.sowing_date,
            FieldName::HarvestDate => &self.harvest_date,
            FieldName::ProduceQuantity => &self.produce_quantity,
            FieldName::FertilizerUsed => &self.fertilizer_used,
        }
    }

    /// Mutable access to a field by name.
    pub fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FarmerId => &mut self.farmer_id,
            FieldName::FarmerName => &mut self.farmer_name,
            FieldName::ContactNumber => &mut self.contact_number,
            FieldName::SurveyNumber => &mut self.survey_number,
            FieldName::LandArea => &mut self.land_area,
            FieldName::SoilType => &mut self.soil_type,
            FieldName::IrrigationSource => &mut self.irrigation_source,
            FieldName::CropSeason => &mut self.crop_season,
            FieldName::CropType => &mut self.crop_type,
            FieldName::SeedQuantity => &mut self.seed_quantity,
            FieldName::SowingDate => &mut self.sowing_date,
            FieldName::HarvestDate => &mut self.harvest_date,
            FieldName::ProduceQuantity => &mut self.produce_quantity,
            FieldName::FertilizerUsed => &mut self.fertilizer_used,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style variant of [`FarmRecord::set`].
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether every field is empty.
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// `(field, value)` pairs in record order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Decode a record from a JSON document.
    ///
    /// Unknown keys are rejected so a misspelled field name does not silently
    /// become an empty value.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| CoreError::MalformedRecord(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode a record from an already-parsed JSON value.
    ///
    /// Strings are taken verbatim, numbers in their JSON text form, and
    /// `null` as empty.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let object = value
            .as_object()
            .ok_or_else(|| CoreError::MalformedRecord("expected a JSON object".to_string()))?;

        let mut record = Self::default();
        for (key, value) in object {
            let field: FieldName = key.parse()?;
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Null => String::new(),
                other => {
                    return Err(CoreError::MalformedRecord(format!(
                        "{key}: expected a string, got {other}"
                    )))
                }
            };
            record.set(field, text);
        }
        Ok(record)
    }
}
