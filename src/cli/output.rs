//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SymptomArgs};
use crate::error::Result;
use crate::ml::naive_bayes::LabelEvaluation;

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub accuracy: f64,
    pub eval_samples: usize,
    pub train_samples: usize,
    pub vocab_size: usize,
    pub duration_ms: u64,
    pub per_label: Vec<LabelEvaluation>,
}

/// Result structure for a classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub category: String,
    pub scores: Option<Vec<CategoryScore>>,
}

/// Log-posterior score of one category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub log_posterior: f64,
}

/// Summary of a saved model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub version: u32,
    pub labels: Vec<String>,
    pub log_prior: Vec<f64>,
    pub vocab_size: usize,
    pub top_features: Vec<String>,
}

/// Result structure for corpus generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    pub examples: usize,
    pub output: String,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SymptomArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SymptomArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SymptomArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}
