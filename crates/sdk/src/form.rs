//! Form state for the launch form.
//!
//! Holds the four user-entered fields as a single record. Edits replace one
//! field at a time; nothing is validated here (see [`crate::launcher::LaunchRequest`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// The four values entered on the launch form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInputs {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub initial_supply: String,
}

impl TokenInputs {
    /// Current value of a single field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Symbol => &self.symbol,
            FieldName::ImageUrl => &self.image_url,
            FieldName::InitialSupply => &self.initial_supply,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Symbol => &mut self.symbol,
            FieldName::ImageUrl => &mut self.image_url,
            FieldName::InitialSupply => &mut self.initial_supply,
        }
    }
}

/// Key of a form field. Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Symbol,
    ImageUrl,
    InitialSupply,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Symbol,
        FieldName::ImageUrl,
        FieldName::InitialSupply,
    ];

    /// Form key, as submitted by an input widget
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Symbol => "symbol",
            FieldName::ImageUrl => "imageUrl",
            FieldName::InitialSupply => "initialSupply",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Symbol => "Symbol",
            FieldName::ImageUrl => "Image URL",
            FieldName::InitialSupply => "Initial Supply",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldName {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "symbol" => Ok(FieldName::Symbol),
            "imageUrl" | "image_url" => Ok(FieldName::ImageUrl),
            "initialSupply" | "initial_supply" => Ok(FieldName::InitialSupply),
            other => Err(SdkError::InvalidParameters(format!(
                "unknown form field: {}",
                other
            ))),
        }
    }
}

/// Owns the form record and applies edits.
#[derive(Debug, Clone, Default)]
pub struct TokenForm {
    inputs: TokenInputs,
}

impl TokenForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &TokenInputs {
        &self.inputs
    }

    /// Replace exactly one field, leaving the others untouched.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        *self.inputs.slot_mut(field) = value.into();
    }

    /// Apply an edit keyed by its form name (`"imageUrl"` etc).
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<(), SdkError> {
        let field = key.parse::<FieldName>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.inputs = TokenInputs::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let form = TokenForm::new();
        for field in FieldName::ALL {
            assert_eq!(form.inputs().get(field), "");
        }
    }

    #[test]
    fn test_set_field_replaces_one_key() {
        let mut form = TokenForm::new();
        form.set_field(FieldName::Name, "Demo");
        form.set_field(FieldName::Symbol, "DEMO");
        form.set_field(FieldName::Name, "Demo Token");

        assert_eq!(form.inputs().name, "Demo Token");
        assert_eq!(form.inputs().symbol, "DEMO");
        assert_eq!(form.inputs().image_url, "");
        assert_eq!(form.inputs().initial_supply, "");
    }

    #[test]
    fn test_last_write_wins_regardless_of_order() {
        let edits = [
            (FieldName::InitialSupply, "1"),
            (FieldName::ImageUrl, "https://x/a.png"),
            (FieldName::Symbol, "AAA"),
            (FieldName::InitialSupply, "1000"),
            (FieldName::Name, "Demo"),
            (FieldName::ImageUrl, "https://x/y.png"),
            (FieldName::Symbol, "DEMO"),
        ];

        let mut forward = TokenForm::new();
        for (field, value) in edits {
            forward.set_field(field, value);
        }

        // Same final value per key, different interleaving
        let mut shuffled = TokenForm::new();
        for (field, value) in [
            (FieldName::Symbol, "AAA"),
            (FieldName::Symbol, "DEMO"),
            (FieldName::Name, "Demo"),
            (FieldName::ImageUrl, "https://x/a.png"),
            (FieldName::InitialSupply, "1"),
            (FieldName::ImageUrl, "https://x/y.png"),
            (FieldName::InitialSupply, "1000"),
        ] {
            shuffled.set_field(field, value);
        }

        assert_eq!(forward.inputs(), shuffled.inputs());
        assert_eq!(forward.inputs().initial_supply, "1000");
        assert_eq!(forward.inputs().image_url, "https://x/y.png");
    }

    #[test]
    fn test_set_field_by_key() {
        let mut form = TokenForm::new();
        form.set_field_by_key("imageUrl", "https://x/y.png").unwrap();
        form.set_field_by_key("initial_supply", "5").unwrap();
        assert_eq!(form.inputs().image_url, "https://x/y.png");
        assert_eq!(form.inputs().initial_supply, "5");

        assert!(form.set_field_by_key("decimals", "9").is_err());
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = TokenForm::new();
        form.set_field(FieldName::Name, "Demo");
        form.set_field(FieldName::InitialSupply, "10");
        form.reset();
        assert_eq!(form.inputs(), &TokenInputs::default());
    }

    #[test]
    fn test_inputs_serialize_with_form_keys() {
        let inputs = TokenInputs {
            name: "Demo".into(),
            symbol: "DEMO".into(),
            image_url: "https://x/y.png".into(),
            initial_supply: "1000".into(),
        };
        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["imageUrl"], "https://x/y.png");
        assert_eq!(json["initialSupply"], "1000");
    }
}
