//! Error handling for ComplexKit
//!
//! Input errors use `thiserror` for their English log description and carry
//! the localized alert text shown to the user.

use thiserror::Error;

use crate::input::InputField;

/// Errors raised while validating a user action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A required text field did not parse as a finite number
    #[error("Invalid numeric input in {field}: {value:?}")]
    InvalidNumericInput {
        /// The field that failed to parse.
        field: InputField,
        /// The raw text that was rejected.
        value: String,
    },

    /// Rotate or multiply requested before a number was confirmed
    #[error("No complex number has been confirmed")]
    NotConfirmed,
}

impl InputError {
    /// Message shown in the blocking alert dialog.
    pub fn alert_message(&self) -> &'static str {
        match self {
            InputError::InvalidNumericInput { field, .. } => match field {
                InputField::Real | InputField::Imaginary => "请输入有效的实部和虚部！",
                InputField::Angle => "请输入有效的旋转角度！",
                InputField::MultiplierReal | InputField::MultiplierImaginary => {
                    "请输入有效的乘数实部和虚部！"
                }
            },
            InputError::NotConfirmed => "请先确定初始复数！",
        }
    }

    /// The field that triggered the error, if any.
    pub fn field(&self) -> Option<InputField> {
        match self {
            InputError::InvalidNumericInput { field, .. } => Some(*field),
            InputError::NotConfirmed => None,
        }
    }
}
