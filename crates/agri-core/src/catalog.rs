//! # Option Catalogs
//!
//! Fixed option sets for the five select fields. A select is valid only when
//! its value is one of the catalog entries, compared exactly.

use crate::field::FieldName;

pub const SOIL_TYPES: &[&str] = &["Sand", "Clay", "Silt", "Peat", "Chalk", "Loam"];

pub const IRRIGATION_SOURCES: &[&str] = &[
    "Surface Water",
    "Groundwater",
    "Rainwater Harvesting",
    "Drip Irrigation",
    "Sprinkler Irrigation",
    "Flood Irrigation",
    "Subsurface Irrigation",
    "River Water",
    "Lake Water",
    "Canal Water",
    "Wells",
    "Reservoirs",
    "Reclaimed Water",
    "Municipal Water Supply",
    "Stormwater Runoff",
];

pub const CROP_SEASONS: &[&str] = &[
    "Spring Crop Season",
    "Summer Crop Season",
    "Autumn (Fall) Crop Season",
    "Winter Crop Season",
];

pub const CROP_TYPES: &[&str] = &[
    "Food Crops",
    "Feed Crops",
    "Fiber Crops",
    "Oilseed Crops",
    "Ornamental Crops",
    "Industrial Crops",
];

pub const FERTILIZERS: &[&str] = &[
    "Compost",
    "Animal Manure",
    "Green Manure",
    "Plant-Based Fertilizers",
    "Bone Meal",
    "Fish Fertilizers",
    "Mineral Fertilizers",
    "Organic Liquid Fertilizers",
    "Ash and Residues",
];

/// A named option set bound to one select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub field: FieldName,
    pub options: &'static [&'static str],
}

impl Catalog {
    /// All five catalogs, in record order.
    pub const ALL: [Catalog; 5] = [
        Catalog { field: FieldName::SoilType, options: SOIL_TYPES },
        Catalog { field: FieldName::IrrigationSource, options: IRRIGATION_SOURCES },
        Catalog { field: FieldName::CropSeason, options: CROP_SEASONS },
        Catalog { field: FieldName::CropType, options: CROP_TYPES },
        Catalog { field: FieldName::FertilizerUsed, options: FERTILIZERS },
    ];

    /// The catalog for `field`, if it is a select field.
    pub fn for_field(field: FieldName) -> Option<Catalog> {
        Self::ALL.into_iter().find(|c| c.field == field)
    }

    /// Whether `value` is one of the options.
    pub fn contains(&self, value: &str) -> bool {
        self.options.contains(&value)
    }
}
