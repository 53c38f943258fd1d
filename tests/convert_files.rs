use std::fs;

use q15_param_converter::io;
use q15_param_converter::params::{
    DiscriminatorParams, GanParameters, GeneratorParams, EXPECTED_SHAPES,
};

fn sample_params() -> GanParameters {
    GanParameters {
        generator: GeneratorParams {
            wg2: vec![vec![0.5, -0.5], vec![0.25, -0.25], vec![0.0, 1.5]],
            bg2: vec![vec![0.1], vec![-0.1], vec![0.0]],
            wg3: vec![vec![0.01, -0.02, 0.03]; 9],
            bg3: vec![vec![0.0]; 9],
        },
        discriminator: DiscriminatorParams {
            wd2: vec![vec![0.05; 9]; 3],
            bd2: vec![vec![-0.3]; 3],
            wd3: vec![vec![0.6, -0.7, 0.8]],
            bd3: vec![vec![-1.0]],
        },
    }
}

#[test]
fn convert_decimal_file_to_hex() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Wg2.txt");
    let output = dir.path().join("Wg2.hex");

    fs::write(&input, "0.50000000 -0.50000000\n0.00000000 1.50000000\n").unwrap();

    let count = io::convert_file(&input, &output).unwrap();
    assert_eq!(count, 4);

    let hex_text = fs::read_to_string(&output).unwrap();
    // 1.5 saturates to the maximum representable value
    assert_eq!(
        hex_text.lines().collect::<Vec<_>>(),
        vec!["4000", "C000", "0000", "7FFF"]
    );
}

#[test]
fn extract_roundtrips_through_text_and_hex() {
    let dir = tempfile::tempdir().unwrap();
    let params = sample_params();

    for (name, matrix) in params.named_matrices().unwrap() {
        let txt = dir.path().join(format!("{name}.txt"));
        let hex = dir.path().join(format!("{name}_q15.hex"));

        io::write_decimal(&txt, &matrix).unwrap();
        io::write_hex_lines(&hex, &matrix.quantize_q15().hex_lines()).unwrap();

        // text file reparsed: same number of values, close to the source
        let reread = io::parse_tokens(&txt).unwrap();
        assert_eq!(reread.len(), matrix.len());
        for (a, b) in reread.iter().zip(&matrix.data) {
            assert!((a - b).abs() < 1e-8);
        }

        // hex file: one 4-digit word per value
        let hex_text = fs::read_to_string(&hex).unwrap();
        let words: Vec<&str> = hex_text.lines().collect();
        assert_eq!(words.len(), matrix.len());
        assert!(words.iter().all(|w| w.len() == 4));
    }
}

#[test]
fn json_store_roundtrips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gan_parameters.json");

    let params = sample_params();
    params.to_json_file(&path).unwrap();

    let back = GanParameters::from_json_file(&path).unwrap();
    let matrices = back.named_matrices().unwrap();
    assert_eq!(matrices.len(), EXPECTED_SHAPES.len());
    for ((name, matrix), (expected_name, expected_shape)) in
        matrices.iter().zip(EXPECTED_SHAPES)
    {
        assert_eq!(*name, expected_name);
        assert_eq!(matrix.shape(), expected_shape);
    }
}
