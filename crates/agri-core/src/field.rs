//! # Survey Field Names
//!
//! The closed set of 14 fields collected by the survey form, with their wire
//! names, human labels, and the form step that owns each one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::step::Step;

/// One of the 14 survey fields.
///
/// Serializes as its camelCase wire name, so it can key JSON objects such as
/// the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FarmerId,
    FarmerName,
    ContactNumber,
    SurveyNumber,
    LandArea,
    SoilType,
    IrrigationSource,
    CropSeason,
    CropType,
    SeedQuantity,
    SowingDate,
    HarvestDate,
    ProduceQuantity,
    FertilizerUsed,
}

impl FieldName {
    /// All fields, in record order.
    pub const ALL: [FieldName; 14] = [
        Self::FarmerId,
        Self::FarmerName,
        Self::ContactNumber,
        Self::SurveyNumber,
        Self::LandArea,
        Self::SoilType,
        Self::IrrigationSource,
        Self::CropSeason,
        Self::CropType,
        Self::SeedQuantity,
        Self::SowingDate,
        Self::HarvestDate,
        Self::ProduceQuantity,
        Self::FertilizerUsed,
    ];

    /// The camelCase name used in JSON bodies and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FarmerId => "farmerId",
            Self::FarmerName => "farmerName",
            Self::ContactNumber => "contactNumber",
            Self::SurveyNumber => "surveyNumber",
            Self::LandArea => "landArea",
            Self::SoilType => "soilType",
            Self::IrrigationSource => "irrigationSource",
            Self::CropSeason => "cropSeason",
            Self::CropType => "cropType",
            Self::SeedQuantity => "seedQuantity",
            Self::SowingDate => "sowingDate",
            Self::HarvestDate => "harvestDate",
            Self::ProduceQuantity => "produceQuantity",
            Self::FertilizerUsed => "fertilizerUsed",
        }
    }

    /// Human-readable label, as shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FarmerId => "Farmer ID",
            Self::FarmerName => "Farmer Name",
            Self::ContactNumber => "Contact Number",
            Self::SurveyNumber => "Survey Number",
            Self::LandArea => "Land Area",
            Self::SoilType => "Soil Type",
            Self::IrrigationSource => "Irrigation Source",
            Self::CropSeason => "Crop Season",
            Self::CropType => "Crop Type",
            Self::SeedQuantity => "Seed Quantity",
            Self::SowingDate => "Sowing Date",
            Self::HarvestDate => "Harvest Date",
            Self::ProduceQuantity => "Produce Quantity",
            Self::FertilizerUsed => "Fertilizer Used",
        }
    }

    /// The form step on which this field is edited and validated.
    pub fn step(&self) -> Step {
        match self {
            Self::FarmerId | Self::FarmerName | Self::ContactNumber => Step::Farmer,
            Self::SurveyNumber
            | Self::LandArea
            | Self::SoilType
            | Self::IrrigationSource
            | Self::CropSeason => Step::Field,
            Self::CropType
            | Self::SeedQuantity
            | Self::SowingDate
            | Self::HarvestDate
            | Self::ProduceQuantity
            | Self::FertilizerUsed => Step::Crop,
        }
    }

    /// Whether keystrokes into this field are restricted to `^\d*\.?\d*$`.
    pub fn accepts_numeric_input(&self) -> bool {
        matches!(
            self,
            Self::ContactNumber
                | Self::SurveyNumber
                | Self::LandArea
                | Self::SeedQuantity
                | Self::ProduceQuantity
        )
    }

    /// Fields belonging to `step`, in record order.
    pub fn for_step(step: Step) -> impl Iterator<Item = FieldName> {
        Self::ALL.into_iter().filter(move |f| f.step() == step)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
