//! # Catalog Subcommand
//!
//! Prints the fixed option sets of the select fields.

use std::fmt::Write as _;

use agri_core::{Catalog, FieldName};
use anyhow::{bail, Result};
use clap::Args;

use crate::EXIT_OK;

/// Arguments for the catalog subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Select field to list (e.g. `soilType`). Lists all when omitted.
    pub field: Option<String>,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    let catalogs = match &args.field {
        Some(name) => {
            let field: FieldName = name.parse()?;
            match Catalog::for_field(field) {
                Some(catalog) => vec![catalog],
                None => bail!("{field} is not a select field"),
            }
        }
        None => Catalog::ALL.to_vec(),
    };
    print!("{}", render(&catalogs));
    Ok(EXIT_OK)
}

fn render(catalogs: &[Catalog]) -> String {
    let mut out = String::new();
    for catalog in catalogs {
        let _ = writeln!(out, "{} ({}):", catalog.field.label(), catalog.field);
        for option in catalog.options {
            let _ = writeln!(out, "  {option}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_catalog() {
        let soil = Catalog::for_field(FieldName::SoilType).unwrap();
        let out = render(&[soil]);
        assert!(out.starts_with("Soil Type (soilType):\n"));
        assert!(out.contains("  Loam\n"));
        assert_eq!(out.lines().count(), 1 + soil.options.len());
    }

    #[test]
    fn text_field_is_rejected() {
        let args = CatalogArgs {
            field: Some("farmerName".into()),
        };
        assert!(run_catalog(&args).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let args = CatalogArgs {
            field: Some("soil".into()),
        };
        assert!(run_catalog(&args).is_err());
    }
}
