use clap::Parser;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use stepsmith::prelude::*;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the legacy definition export format and are only used
// here for conversion.

#[derive(Deserialize)]
struct RawApp {
    general: RawGeneral,
    #[serde(default)]
    triggers: IndexMap<String, RawStep>,
    #[serde(default)]
    searches: IndexMap<String, RawStep>,
    #[serde(default)]
    actions: IndexMap<String, RawStep>,
}

#[derive(Deserialize)]
struct RawGeneral {
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct RawStep {
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    sample_result_fields: Option<IndexMap<String, RawSampleField>>,
}

#[derive(Deserialize)]
struct RawField {
    key: String,
    #[serde(rename = "type")]
    field_type: Option<String>,
    #[serde(default)]
    label: String,
    help_text: Option<serde_json::Value>,
    // Legacy exports carry `required` as a bool, a number, or a string.
    required: Option<serde_json::Value>,
    placeholder: Option<String>,
}

#[derive(Deserialize)]
struct RawSampleField {
    #[serde(rename = "type")]
    field_type: Option<String>,
    #[serde(default)]
    label: String,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON export to the canonical
// LegacyApp model.

impl IntoLegacyApp for RawApp {
    fn into_legacy_app(self) -> std::result::Result<LegacyApp, DefinitionConversionError> {
        Ok(LegacyApp {
            general: GeneralInfo {
                title: self.general.title,
                description: self.general.description,
            },
            triggers: convert_steps(self.triggers),
            searches: convert_steps(self.searches),
            actions: convert_steps(self.actions),
        })
    }
}

fn convert_steps(raw: IndexMap<String, RawStep>) -> IndexMap<String, LegacyStepDefinition> {
    raw.into_iter()
        .map(|(key, step)| {
            let fields = step
                .fields
                .into_iter()
                .map(|field| {
                    (
                        field.key,
                        LegacyFieldDefinition {
                            field_type: field.field_type,
                            label: field.label,
                            required: Some(coerce_required(field.required.as_ref())),
                            help_text: field.help_text,
                            placeholder: field.placeholder,
                        },
                    )
                })
                .collect();
            let sample_result_fields = step.sample_result_fields.map(|sample| {
                sample
                    .into_iter()
                    .map(|(sample_key, spec)| {
                        (
                            sample_key,
                            SampleFieldDefinition {
                                field_type: spec.field_type,
                                label: spec.label,
                            },
                        )
                    })
                    .collect()
            });
            (
                key,
                LegacyStepDefinition {
                    fields,
                    sample_result_fields,
                },
            )
        })
        .collect()
}

/// A batch converter that turns legacy app definitions into file-per-step platform modules
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the legacy app definition JSON file
    definition_path: String,
    /// Directory the generated app is written into
    output_dir: PathBuf,

    /// Directory containing the step, index and package templates
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let definition_json = fs::read_to_string(&cli.definition_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read definition file '{}': {}",
            &cli.definition_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let raw_app: RawApp = serde_json::from_str(&definition_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse definition JSON: {}", e)));
    let app = raw_app
        .into_legacy_app()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert definition: {}", e)));

    let step_count = app.triggers.len() + app.searches.len() + app.actions.len();
    println!(
        "Converting app '{}' ({} steps) into '{}'...",
        app.general.title,
        step_count,
        cli.output_dir.display()
    );

    // --- 3. Rendering and Writing ---
    let convert_start = Instant::now();
    convert_app(&app, &cli.templates, &cli.output_dir)
        .await
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    let convert_duration = convert_start.elapsed();

    // --- 4. Summary ---
    println!("\nConversion Finished!");
    println!("  -> Triggers: {}", app.triggers.len());
    println!("  -> Searches: {}", app.searches.len());
    println!("  -> Writes:   {}", app.actions.len());
    println!("  -> Plus index.js and package.json");

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:       {:?}", load_duration);
    println!("Render and Write:   {:?}", convert_duration);
    println!("---------------------------");
    println!("Total Execution:    {:?}", total_duration);
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
