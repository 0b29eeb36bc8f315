//! Model persistence.
//!
//! A model is stored as one flat JSON object:
//!
//! ```text
//! {
//!   "labels":       ["FEVER", ...],            // class order
//!   "vocab":        ["w:fever", "g3:fev", ...], // feature order
//!   "log_prior":    [f64, ...],                 // one per label
//!   "log_prob":     [[f64, ...], ...],          // one row per label, len(vocab) each
//!   "unk_log_prob": [f64, ...],                 // one per label
//!   "version":      2
//! }
//! ```
//!
//! Loading checks the version before anything else and refuses any other
//! number (negative, fractional or out of range included) with
//! [`SymptomError::VersionMismatch`]. Structural problems (missing
//! fields, wrong row lengths, non-finite values) fail with
//! [`SymptomError::MalformedModel`]. Nothing is returned on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::analysis::feature::FeatureToken;
use crate::corpus::Category;
use crate::error::{Result, SymptomError};
use crate::ml::naive_bayes::{MODEL_VERSION, NaiveBayesModel, Vocabulary};

/// Flat serialized form of a [`NaiveBayesModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub labels: Vec<Category>,
    pub vocab: Vec<FeatureToken>,
    pub log_prior: Vec<f64>,
    pub log_prob: Vec<Vec<f64>>,
    pub unk_log_prob: Vec<f64>,
    pub version: u32,
}

impl From<&NaiveBayesModel> for ModelRecord {
    fn from(model: &NaiveBayesModel) -> Self {
        Self {
            labels: model.labels().to_vec(),
            vocab: model.vocabulary().features().to_vec(),
            log_prior: model.log_prior().to_vec(),
            log_prob: model.log_prob().to_vec(),
            unk_log_prob: model.unk_log_prob().to_vec(),
            version: model.version(),
        }
    }
}

impl TryFrom<ModelRecord> for NaiveBayesModel {
    type Error = SymptomError;

    fn try_from(record: ModelRecord) -> Result<Self> {
        if record.version != MODEL_VERSION {
            return Err(SymptomError::version_mismatch(
                MODEL_VERSION,
                record.version.to_string(),
            ));
        }
        let vocabulary = Vocabulary::from_features(record.vocab)?;
        NaiveBayesModel::from_parts(
            record.labels,
            vocabulary,
            record.log_prior,
            record.log_prob,
            record.unk_log_prob,
            record.version,
        )
    }
}

/// Reads and writes models in the flat JSON layout.
pub struct ModelStore;

impl ModelStore {
    /// Write `model` to `path` atomically.
    ///
    /// The JSON is written to a temporary file in the destination directory
    /// and renamed over `path`, so readers never observe a partial model.
    pub fn save<P: AsRef<Path>>(model: &NaiveBayesModel, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            Self::to_writer(model, &mut writer)?;
            writer.flush()?;
        }
        temp_file.persist(path).map_err(|e| e.error)?;

        info!(
            "Saved model ({} labels, {} features) to {}",
            model.num_classes(),
            model.vocabulary().len(),
            path.display()
        );
        Ok(())
    }

    /// Read a model from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<NaiveBayesModel> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let model = Self::from_reader(BufReader::new(file))?;

        info!(
            "Loaded model ({} labels, {} features) from {}",
            model.num_classes(),
            model.vocabulary().len(),
            path.display()
        );
        Ok(model)
    }

    /// Serialize `model` as JSON into `writer`.
    pub fn to_writer<W: Write>(model: &NaiveBayesModel, writer: W) -> Result<()> {
        serde_json::to_writer(writer, &ModelRecord::from(model))?;
        Ok(())
    }

    /// Deserialize a model from JSON read from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<NaiveBayesModel> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Serialize `model` to a JSON string.
    pub fn to_json_string(model: &NaiveBayesModel) -> Result<String> {
        Ok(serde_json::to_string(&ModelRecord::from(model))?)
    }

    /// Deserialize a model from a JSON string.
    pub fn from_json_str(json: &str) -> Result<NaiveBayesModel> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<NaiveBayesModel> {
        // Version first: a model from another format is never interpreted.
        // Any number other than the exact integer is a mismatch, reported as
        // written; only a missing or non-numeric version is malformed.
        let version = match value.get("version") {
            Some(Value::Number(number)) => number,
            Some(_) => return Err(SymptomError::malformed_model("`version` is not a number")),
            None => return Err(SymptomError::malformed_model("missing field `version`")),
        };
        if version.as_u64() != Some(u64::from(MODEL_VERSION)) {
            return Err(SymptomError::version_mismatch(
                MODEL_VERSION,
                version.to_string(),
            ));
        }

        let record: ModelRecord = serde_json::from_value(value)
            .map_err(|e| SymptomError::malformed_model(e.to_string()))?;
        NaiveBayesModel::try_from(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::LabeledExample;
    use crate::ml::naive_bayes::train;

    fn model() -> NaiveBayesModel {
        let examples = vec![
            LabeledExample::new("high fever", Category::new("FEVER")),
            LabeledExample::new("runny nose", Category::new("COLD")),
            LabeledExample::new("dry cough", Category::new("COUGH")),
        ];
        let categories = vec![
            Category::new("FEVER"),
            Category::new("COLD"),
            Category::new("COUGH"),
        ];
        train(&categories, &examples, 20, 1.0).unwrap()
    }

    fn record_json(model: &NaiveBayesModel) -> Value {
        serde_json::to_value(ModelRecord::from(model)).unwrap()
    }

    #[test]
    fn test_round_trip_in_memory() {
        let model = model();
        let json = ModelStore::to_json_string(&model).unwrap();
        let loaded = ModelStore::from_json_str(&json).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");
        let model = model();

        ModelStore::save(&model, &path).unwrap();
        let loaded = ModelStore::load(&path).unwrap();

        assert_eq!(loaded, model);
        assert_eq!(loaded.vocabulary().features(), model.vocabulary().features());
        assert_eq!(loaded.version(), MODEL_VERSION);
    }

    #[test]
    fn test_layout_field_names() {
        let value = record_json(&model());
        for field in ["labels", "vocab", "log_prior", "log_prob", "unk_log_prob", "version"] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["version"], 2);
        assert_eq!(value["labels"][0], "FEVER");
    }

    #[test]
    fn test_version_mismatch() {
        let mut value = record_json(&model());
        value["version"] = Value::from(1);

        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(
            result,
            Err(SymptomError::VersionMismatch { expected: 2, ref found }) if found == "1"
        ));
    }

    #[test]
    fn test_version_mismatch_keeps_stored_value() {
        let cases = [
            (Value::from(-1), "-1"),
            (Value::from(2.0), "2.0"),
            (Value::from(5_000_000_000u64), "5000000000"),
            (Value::from(-5_000_000_000i64), "-5000000000"),
        ];

        for (version, expected_found) in cases {
            let mut value = record_json(&model());
            value["version"] = version;

            match ModelStore::from_json_str(&value.to_string()) {
                Err(SymptomError::VersionMismatch { expected, found }) => {
                    assert_eq!(expected, MODEL_VERSION);
                    assert_eq!(found, expected_found);
                }
                other => panic!("Expected VersionMismatch for {expected_found}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_numeric_version() {
        for version in [Value::from("2"), Value::Null, Value::from(true)] {
            let mut value = record_json(&model());
            value["version"] = version;

            let result = ModelStore::from_json_str(&value.to_string());
            assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
        }
    }

    #[test]
    fn test_version_checked_before_structure() {
        let value = serde_json::json!({ "version": 3, "labels": "not a list" });
        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(result, Err(SymptomError::VersionMismatch { .. })));
    }

    #[test]
    fn test_missing_field() {
        let mut value = record_json(&model());
        value.as_object_mut().unwrap().remove("unk_log_prob");

        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
    }

    #[test]
    fn test_missing_version() {
        let mut value = record_json(&model());
        value.as_object_mut().unwrap().remove("version");

        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
    }

    #[test]
    fn test_short_row() {
        let mut value = record_json(&model());
        value["log_prob"][1].as_array_mut().unwrap().pop();

        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
    }

    #[test]
    fn test_prior_count_mismatch() {
        let mut value = record_json(&model());
        value["log_prior"].as_array_mut().unwrap().pop();

        let result = ModelStore::from_json_str(&value.to_string());
        assert!(matches!(result, Err(SymptomError::MalformedModel(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = ModelStore::from_json_str("{ not json");
        assert!(matches!(result, Err(SymptomError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelStore::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SymptomError::Io(_))));
    }
}
