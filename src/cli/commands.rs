//! Command implementations for the symptom-nb CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{CorpusConfig, CorpusSynthesizer, SynthesisConfig};
use crate::error::Result;
use crate::ml::naive_bayes::NaiveBayesClassifier;
use crate::pipeline::{TrainingConfig, TrainingPipeline};
use crate::storage::ModelStore;

/// Execute a CLI command.
pub fn execute_command(args: SymptomArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_model(train_args.clone(), &args),
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_model(inspect_args.clone(), &args),
        Command::Generate(generate_args) => generate_corpus(generate_args.clone(), &args),
    }
}

/// Train, evaluate and save a model.
fn train_model(args: TrainArgs, cli_args: &SymptomArgs) -> Result<()> {
    let start = Instant::now();
    let corpus = load_corpus_config(&args.corpus, cli_args)?;

    let training = TrainingConfig {
        examples_per_category: args.corpus.examples_per_category,
        vocab_cap: args.vocab_cap,
        alpha: args.alpha,
        train_ratio: args.train_ratio,
        seed: args.corpus.seed,
    };
    let pipeline = TrainingPipeline::new(corpus, synthesis_config(&args.corpus), training)?;
    let report = pipeline.run()?;

    ModelStore::save(&report.model, &args.output)?;

    output_result(
        "Model trained successfully",
        &TrainingResult {
            model_path: args.output.to_string_lossy().to_string(),
            accuracy: report.evaluation.accuracy,
            eval_samples: report.eval_size,
            train_samples: report.train_size,
            vocab_size: report.vocab_size,
            duration_ms: start.elapsed().as_millis() as u64,
            per_label: report.evaluation.per_label,
        },
        cli_args,
    )
}

/// Classify one utterance.
fn classify_text(args: ClassifyArgs, cli_args: &SymptomArgs) -> Result<()> {
    let model = ModelStore::load(&args.model)?;
    let classifier = NaiveBayesClassifier::new(Arc::new(model));
    let text = args.joined_text();

    let category = classifier.classify(&text).to_string();
    let scores = args.scores.then(|| {
        classifier
            .scores(&text)
            .into_iter()
            .map(|(category, log_posterior)| CategoryScore {
                category: category.to_string(),
                log_posterior,
            })
            .collect()
    });

    output_result(
        "Classification",
        &ClassificationResult {
            text,
            category,
            scores,
        },
        cli_args,
    )
}

/// Summarize a saved model.
fn inspect_model(args: InspectArgs, cli_args: &SymptomArgs) -> Result<()> {
    let model = ModelStore::load(&args.model)?;

    output_result(
        &format!("Model: {}", args.model.display()),
        &ModelSummary {
            version: model.version(),
            labels: model.labels().iter().map(|l| l.to_string()).collect(),
            log_prior: model.log_prior().to_vec(),
            vocab_size: model.vocabulary().len(),
            top_features: model
                .vocabulary()
                .features()
                .iter()
                .take(args.top)
                .map(|f| f.to_string())
                .collect(),
        },
        cli_args,
    )
}

/// Dump the synthetic corpus as JSON lines.
fn generate_corpus(args: GenerateArgs, cli_args: &SymptomArgs) -> Result<()> {
    let corpus = load_corpus_config(&args.corpus, cli_args)?;
    let synthesizer = CorpusSynthesizer::new(&corpus, synthesis_config(&args.corpus))?;
    let mut rng = StdRng::seed_from_u64(args.corpus.seed);
    let examples = synthesizer.generate(args.corpus.examples_per_category, &mut rng);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for example in &examples {
        serde_json::to_writer(&mut writer, example)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    // Keep stdout clean when it carries the corpus itself.
    if let Some(path) = &args.output {
        output_result(
            "Corpus generated",
            &GenerationResult {
                examples: examples.len(),
                output: path.to_string_lossy().to_string(),
            },
            cli_args,
        )?;
    }
    Ok(())
}

fn load_corpus_config(args: &CorpusArgs, cli_args: &SymptomArgs) -> Result<CorpusConfig> {
    match &args.seeds_file {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                eprintln!("Loading seed table from: {}", path.display());
            }
            CorpusConfig::from_json_file(path)
        }
        None => Ok(CorpusConfig::default()),
    }
}

fn synthesis_config(args: &CorpusArgs) -> SynthesisConfig {
    SynthesisConfig {
        blended_examples: args.blended,
        ..SynthesisConfig::default()
    }
}
