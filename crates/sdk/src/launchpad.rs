//! Form controller: one update function consuming user intents.

use tracing::debug;

use crate::client::Wallet;
use crate::error::LaunchResult;
use crate::fields::{field_descriptors, FieldDescriptor};
use crate::form::{FieldName, TokenForm, TokenInputs};
use crate::launcher::{LaunchReceipt, TokenLauncher};

/// Something the user did on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Edit { field: FieldName, value: String },
    Submit,
    Reset,
}

impl FormIntent {
    pub fn edit(field: FieldName, value: impl Into<String>) -> Self {
        FormIntent::Edit {
            field,
            value: value.into(),
        }
    }
}

/// Outcome of applying one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Edited(FieldName),
    Cleared,
    Launched(LaunchReceipt),
}

/// The launch form bound to a launcher.
///
/// `update` takes `&mut self`, so a pad can only have one submission in
/// flight. Separate pads (or direct [`TokenLauncher::launch`] calls) are not
/// deduplicated against each other.
pub struct LaunchPad {
    form: TokenForm,
    launcher: TokenLauncher,
}

impl LaunchPad {
    pub fn new(launcher: TokenLauncher) -> Self {
        Self {
            form: TokenForm::new(),
            launcher,
        }
    }

    pub fn inputs(&self) -> &TokenInputs {
        self.form.inputs()
    }

    /// Descriptors for rendering the current form
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        field_descriptors(self.form.inputs())
    }

    /// Apply one intent. A submission that put a mint on chain clears the
    /// form; a dry run or a failed one leaves the inputs in place.
    pub async fn update(&mut self, intent: FormIntent, wallet: &dyn Wallet) -> LaunchResult<FormUpdate> {
        match intent {
            FormIntent::Edit { field, value } => {
                debug!(field = field.key(), "field edited");
                self.form.set_field(field, value);
                Ok(FormUpdate::Edited(field))
            }
            FormIntent::Reset => {
                self.form.reset();
                Ok(FormUpdate::Cleared)
            }
            FormIntent::Submit => {
                let receipt = self.launcher.launch(wallet, self.form.inputs()).await?;
                if !receipt.is_dry_run() {
                    self.form.reset();
                }
                Ok(FormUpdate::Launched(receipt))
            }
        }
    }
}
