//! Input form model: field text, which fields are unlocked, and focus.

use complexkit_core::InputField;
use serde::{Deserialize, Serialize};

/// The four action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    ConfirmComplex,
    ConfirmRotate,
    ConfirmMultiply,
    ResetAll,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::ConfirmComplex,
        Trigger::ConfirmRotate,
        Trigger::ConfirmMultiply,
        Trigger::ResetAll,
    ];

    /// Index into [`Trigger::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Trigger::ConfirmComplex => 0,
            Trigger::ConfirmRotate => 1,
            Trigger::ConfirmMultiply => 2,
            Trigger::ResetAll => 3,
        }
    }

    /// The field whose lock state this trigger follows. Reset is never locked.
    pub fn controlling_field(&self) -> Option<InputField> {
        match self {
            Trigger::ConfirmComplex => Some(InputField::Real),
            Trigger::ConfirmRotate => Some(InputField::Angle),
            Trigger::ConfirmMultiply => Some(InputField::MultiplierReal),
            Trigger::ResetAll => None,
        }
    }
}

/// Text and enablement of the five numeric inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputForm {
    texts: [String; 5],
    enabled: [bool; 5],
    focus: Option<InputField>,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InputForm {
    /// A form in its initial configuration.
    pub fn new() -> Self {
        let mut form = Self {
            texts: Default::default(),
            enabled: [false; 5],
            focus: None,
        };
        form.reset();
        form
    }

    /// Default text everywhere; only the real/imaginary pair unlocked, with
    /// focus on the real part.
    pub fn reset(&mut self) {
        for field in InputField::ALL {
            self.texts[field.index()] = field.default_text().to_string();
        }
        self.set_complex_entry_enabled(true);
        self.set_enabled(InputField::Angle, false);
        self.set_multiplier_enabled(false);
        self.focus = Some(InputField::Real);
    }

    /// Lock the number entry and open the rotate and multiply inputs.
    pub fn enter_operation_mode(&mut self) {
        self.set_complex_entry_enabled(false);
        self.set_enabled(InputField::Angle, true);
        self.set_multiplier_enabled(true);
        self.focus = Some(InputField::Angle);
    }

    /// Lock the angle and reopen the number entry for the next value.
    pub fn finish_rotation(&mut self) {
        self.set_enabled(InputField::Angle, false);
        self.set_complex_entry_enabled(true);
        self.focus = Some(InputField::Real);
    }

    pub fn text(&self, field: InputField) -> &str {
        &self.texts[field.index()]
    }

    pub fn set_text(&mut self, field: InputField, text: impl Into<String>) {
        self.texts[field.index()] = text.into();
    }

    pub fn is_enabled(&self, field: InputField) -> bool {
        self.enabled[field.index()]
    }

    pub fn set_enabled(&mut self, field: InputField, enabled: bool) {
        self.enabled[field.index()] = enabled;
    }

    pub fn is_trigger_enabled(&self, trigger: Trigger) -> bool {
        trigger
            .controlling_field()
            .map_or(true, |field| self.is_enabled(field))
    }

    /// Field that should hold keyboard focus, if any.
    pub fn focus(&self) -> Option<InputField> {
        self.focus
    }

    fn set_complex_entry_enabled(&mut self, enabled: bool) {
        self.set_enabled(InputField::Real, enabled);
        self.set_enabled(InputField::Imaginary, enabled);
    }

    fn set_multiplier_enabled(&mut self, enabled: bool) {
        self.set_enabled(InputField::MultiplierReal, enabled);
        self.set_enabled(InputField::MultiplierImaginary, enabled);
    }
}
