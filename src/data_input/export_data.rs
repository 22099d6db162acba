// src/data_input/export_data.rs

/// A single named numeric column read from an export file: the label from
/// the header line plus the samples in file order. Samples are implicitly
/// indexed by position; the export format carries no timestamps of its own.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub samples: Vec<f64>,
}

impl Column {
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        Column {
            label: label.into(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// src/data_input/export_data.rs
