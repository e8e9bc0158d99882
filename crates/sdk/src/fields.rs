//! Field descriptors driving how the form is rendered.

use serde::Serialize;

use crate::form::{FieldName, TokenInputs};

/// One rendered input: its label, key, bound value and required flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub label: &'static str,
    pub name: FieldName,
    pub value: String,
    pub required: bool,
}

/// Descriptors for every field, in render order.
pub fn field_descriptors(inputs: &TokenInputs) -> Vec<FieldDescriptor> {
    FieldName::ALL
        .iter()
        .map(|&name| FieldDescriptor {
            label: name.label(),
            name,
            value: inputs.get(name).to_string(),
            required: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_inputs() -> TokenInputs {
        TokenInputs {
            name: "Demo".into(),
            symbol: "DEMO".into(),
            image_url: "https://x/y.png".into(),
            initial_supply: "1000".into(),
        }
    }

    #[test]
    fn test_four_required_fields_in_order() {
        let descriptors = field_descriptors(&demo_inputs());
        let labels: Vec<_> = descriptors.iter().map(|d| d.label).collect();
        assert_eq!(labels, ["Name", "Symbol", "Image URL", "Initial Supply"]);
        assert!(descriptors.iter().all(|d| d.required));
    }

    #[test]
    fn test_values_mirror_inputs() {
        let inputs = demo_inputs();
        for descriptor in field_descriptors(&inputs) {
            assert_eq!(descriptor.value, inputs.get(descriptor.name));
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = demo_inputs();
        assert_eq!(field_descriptors(&inputs), field_descriptors(&inputs));
        assert_eq!(
            field_descriptors(&TokenInputs::default()),
            field_descriptors(&TokenInputs::default())
        );
    }
}
