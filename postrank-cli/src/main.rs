use clap::Parser;
use postrank::{
    Classifier, ClassifyConfig, DetectedEmotion, DetectionConfig, Detector, EmotionRecognizer,
    FaceBox, LabelTable, PixelRect, RankedCategory, ScoredBox,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Postrank CLI: rank raw model output (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Mode {
    #[default]
    Detect,
    Classify,
    Emotion,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum BuiltinLabels {
    Coco,
    Emotions,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LabelSource {
    Builtin(BuiltinLabels),
    File(PathBuf),
}

impl LabelSource {
    fn default_for(mode: &Mode) -> Self {
        match mode {
            Mode::Emotion => LabelSource::Builtin(BuiltinLabels::Emotions),
            Mode::Detect | Mode::Classify => LabelSource::Builtin(BuiltinLabels::Coco),
        }
    }

    fn load(&self) -> postrank::PostRankResult<LabelTable> {
        match self {
            LabelSource::Builtin(BuiltinLabels::Coco) => Ok(LabelTable::coco()),
            LabelSource::Builtin(BuiltinLabels::Emotions) => Ok(LabelTable::emotions()),
            LabelSource::File(path) => LabelTable::from_json_file(path),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct ImageSize {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    mode: Mode,
    scores_path: String,
    labels: Option<LabelSource>,
    row_width: Option<usize>,
    detection: DetectionConfig,
    top: usize,
    face: Option<FaceBox>,
    image_size: Option<ImageSize>,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Detect,
            scores_path: String::new(),
            labels: None,
            row_width: None,
            detection: DetectionConfig::default(),
            top: ClassifyConfig::default().top,
            face: None,
            image_size: None,
            output_path: None,
        }
    }
}

impl Config {
    /// Label source from the config, or the built-in table matching `mode`.
    fn label_source(&self) -> LabelSource {
        self.labels
            .clone()
            .unwrap_or_else(|| LabelSource::default_for(&self.mode))
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    #[serde(flatten)]
    detection: ScoredBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pixels: Option<PixelRect>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Output {
    Detections(Vec<DetectionRecord>),
    Categories(Vec<RankedCategory>),
    Emotion(Option<DetectedEmotion>),
}

fn run(
    config: &Config,
    labels: LabelTable,
    scores: &[f32],
) -> Result<Output, Box<dyn std::error::Error>> {
    let output = match config.mode {
        Mode::Detect => {
            let detector = Detector::new(labels).with_config(config.detection)?;
            let row_width = config.row_width.unwrap_or_else(|| detector.row_width());
            let kept = detector.detect_rows(scores, row_width)?;
            let records = kept
                .into_iter()
                .map(|detection| DetectionRecord {
                    pixels: config
                        .image_size
                        .map(|size| detection.bbox.to_pixels(size.width, size.height)),
                    detection,
                })
                .collect();
            Output::Detections(records)
        }
        Mode::Classify => {
            let classifier =
                Classifier::new(labels).with_config(ClassifyConfig { top: config.top })?;
            Output::Categories(classifier.classify(scores)?)
        }
        Mode::Emotion => {
            let recognizer = EmotionRecognizer::new(labels);
            Output::Emotion(recognizer.recognize(scores, config.face)?)
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("postrank=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.scores_path.is_empty() {
        return Err("scores_path must be set in the config".into());
    }

    let labels = config.label_source().load()?;
    let scores_text = fs::read_to_string(&config.scores_path)?;
    let scores: Vec<f32> = serde_json::from_str(&scores_text)?;
    tracing::info!(values = scores.len(), labels = labels.len(), "loaded model output");

    let output = run(&config, labels, &scores)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
