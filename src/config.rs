//! Conversion run configuration.

use std::path::PathBuf;

/// Parameter files in their canonical order.
pub const PARAM_FILES: [&str; 8] = [
    "Wg2.txt", "bg2.txt", "Wg3.txt", "bg3.txt", // Generator
    "Wd2.txt", "bd2.txt", "Wd3.txt", "bd3.txt", // Discriminator
];

/// Number of latent input sample files included in a conversion run.
pub const NUM_INPUT_SAMPLES: usize = 10;

/// Directory layout and file list for a conversion run.
///
/// Explicit values instead of defaults baked into the conversion code, so a
/// caller can point the converter at any layout.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub params_dir: PathBuf,
    pub hex_dir: PathBuf,
    pub param_files: Vec<String>,
}

impl ConvertConfig {
    /// Standard file list: the 8 parameter files plus the input samples.
    pub fn new(params_dir: PathBuf, hex_dir: PathBuf) -> Self {
        let mut param_files: Vec<String> =
            PARAM_FILES.iter().map(|name| name.to_string()).collect();
        for i in 0..NUM_INPUT_SAMPLES {
            param_files.push(format!("input_sample_{i:02}.txt"));
        }

        Self {
            params_dir,
            hex_dir,
            param_files,
        }
    }
}
