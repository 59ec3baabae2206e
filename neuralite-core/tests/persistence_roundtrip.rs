use neuralite_core::{NeuraliteError, Vector};

mod common;
use common::{xor_data, xor_network};

#[test]
fn test_save_then_load_reproduces_predictions() -> Result<(), NeuraliteError> {
    let (inputs, targets) = xor_data()?;
    let mut trained = xor_network(3)?;
    trained.train(&inputs, &targets, 0.1, 200)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("weights.json");
    trained.save_weights(&path)?;

    let mut restored = xor_network(4)?;
    restored.load_weights(&path)?;

    for input in inputs.rows() {
        assert_eq!(trained.predict(input)?, restored.predict(input)?);
    }
    assert_eq!(trained.to_records(), restored.to_records());
    Ok(())
}

#[test]
fn test_saved_file_is_a_json_array_of_records() -> Result<(), NeuraliteError> {
    let net = xor_network(5)?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("weights.json");
    net.save_weights(&path)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let layers = value.as_array().map(|a| a.len());
    assert_eq!(layers, Some(2));
    assert_eq!(value[0]["weights"].as_array().map(|rows| rows.len()), Some(2));
    assert_eq!(value[1]["biases"].as_array().map(|b| b.len()), Some(1));
    Ok(())
}

#[test]
fn test_load_errors() -> Result<(), NeuraliteError> {
    let dir = tempfile::tempdir()?;
    let mut net = xor_network(6)?;
    let before = net.predict(&Vector::from([1.0, 1.0]))?;

    let missing = net.load_weights(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(NeuraliteError::Io(_))));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json")?;
    assert!(matches!(net.load_weights(&garbage), Err(NeuraliteError::Serialization(_))));

    let wrong_arch = dir.path().join("wrong.json");
    std::fs::write(&wrong_arch, r#"[{"weights":[[1.0]],"biases":[0.0]}]"#)?;
    assert!(matches!(net.load_weights(&wrong_arch), Err(NeuraliteError::ShapeMismatch { .. })));

    assert_eq!(net.predict(&Vector::from([1.0, 1.0]))?, before);
    Ok(())
}
