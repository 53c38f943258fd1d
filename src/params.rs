//! Typed GAN parameter store.
//!
//! Layer shapes for the trained 3x3 generator/discriminator pair: the latent
//! dimension is 2, hidden layers have 3 units, and images are 3x3 = 9 pixels.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::matrices::Matrix;

/// Canonical parameter order and expected shape of each matrix.
pub const EXPECTED_SHAPES: [(&str, (usize, usize)); 8] = [
    ("Wg2", (3, 2)),
    ("bg2", (3, 1)),
    ("Wg3", (9, 3)),
    ("bg3", (9, 1)),
    ("Wd2", (3, 9)),
    ("bd2", (3, 1)),
    ("Wd3", (1, 3)),
    ("bd3", (1, 1)),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanParameters {
    pub generator: GeneratorParams,
    pub discriminator: DiscriminatorParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    #[serde(rename = "Wg2")]
    pub wg2: Vec<Vec<f64>>,
    #[serde(rename = "bg2")]
    pub bg2: Vec<Vec<f64>>,
    #[serde(rename = "Wg3")]
    pub wg3: Vec<Vec<f64>>,
    #[serde(rename = "bg3")]
    pub bg3: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscriminatorParams {
    #[serde(rename = "Wd2")]
    pub wd2: Vec<Vec<f64>>,
    #[serde(rename = "bd2")]
    pub bd2: Vec<Vec<f64>>,
    #[serde(rename = "Wd3")]
    pub wd3: Vec<Vec<f64>>,
    #[serde(rename = "bd3")]
    pub bd3: Vec<Vec<f64>>,
}

impl GanParameters {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConvertError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// All parameter matrices in canonical order, every shape validated.
    pub fn named_matrices(&self) -> Result<Vec<(&'static str, Matrix<f64>)>> {
        let raw: [&Vec<Vec<f64>>; 8] = [
            &self.generator.wg2,
            &self.generator.bg2,
            &self.generator.wg3,
            &self.generator.bg3,
            &self.discriminator.wd2,
            &self.discriminator.bd2,
            &self.discriminator.wd3,
            &self.discriminator.bd3,
        ];

        let mut out = Vec::with_capacity(raw.len());
        for ((name, expected), rows) in EXPECTED_SHAPES.into_iter().zip(raw) {
            let matrix = Matrix::from_rows(rows)?;
            if matrix.shape() != expected {
                return Err(ConvertError::InvalidShape {
                    name: name.to_string(),
                    expected,
                    got: matrix.shape(),
                });
            }
            out.push((name, matrix));
        }
        Ok(out)
    }
}
