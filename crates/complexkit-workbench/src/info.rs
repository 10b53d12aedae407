//! Read-only result panel.

use serde::{Deserialize, Serialize};

/// The five text outputs shown beside the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    InitialComplex,
    RotationAngle,
    RotatedComplex,
    MultiplierComplex,
    ProductComplex,
}

impl OutputField {
    pub const ALL: [OutputField; 5] = [
        OutputField::InitialComplex,
        OutputField::RotationAngle,
        OutputField::RotatedComplex,
        OutputField::MultiplierComplex,
        OutputField::ProductComplex,
    ];

    /// Index into [`OutputField::ALL`].
    pub fn index(&self) -> usize {
        match self {
            OutputField::InitialComplex => 0,
            OutputField::RotationAngle => 1,
            OutputField::RotatedComplex => 2,
            OutputField::MultiplierComplex => 3,
            OutputField::ProductComplex => 4,
        }
    }

    /// Caption shown next to the value.
    pub fn caption(&self) -> &'static str {
        match self {
            OutputField::InitialComplex => "Initial number z:",
            OutputField::RotationAngle => "Rotation angle θ:",
            OutputField::RotatedComplex => "Rotated number z':",
            OutputField::MultiplierComplex => "Multiplier w:",
            OutputField::ProductComplex => "Product z·w:",
        }
    }
}

/// Current text of every output; empty means cleared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfoPanel {
    values: [String; 5],
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: OutputField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: OutputField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn clear_field(&mut self, field: OutputField) {
        self.values[field.index()].clear();
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}
