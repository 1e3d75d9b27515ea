//! tagfield demo binary: render a template, or replay a script against it.

use std::fs;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::json;

use tagfield::cli::{CliArgs, OutputFormat, RunConfig, TemplateSource};
use tagfield::config::EditorConfig;
use tagfield::script::{parse_script, ScriptRunner};
use tagfield::template::{parse, Segment};
use tagfield::view::{render_with_placeholder, ViewOptions};
use tagfield::TemplateEditor;

fn main() -> Result<()> {
    tagfield::tracing::init();

    let run = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    let config = match &run.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    let template = match &run.source {
        TemplateSource::Inline(text) => text.clone(),
        TemplateSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?,
        TemplateSource::Empty => String::new(),
    };

    let editor = build_editor(&template, &config, &run);
    tracing::debug!(widgets = editor.live_widget_count(), "editor ready");

    match &run.script {
        Some(path) => replay(editor, path, run.format),
        None => {
            print_editor(&editor, &config, run.format)?;
            Ok(())
        }
    }
}

fn build_editor(template: &str, config: &EditorConfig, run: &RunConfig) -> TemplateEditor {
    let mut fallbacks = config.fallbacks.clone();
    fallbacks.extend(run.fallbacks.iter().cloned());
    let mut labels = config.labels.clone();
    for (name, label) in &run.labels {
        labels.insert(name.as_str(), label.as_str());
    }
    TemplateEditor::with_options(template, fallbacks, labels)
}

fn print_editor(editor: &TemplateEditor, config: &EditorConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::View => {
            println!(
                "{}",
                render_with_placeholder(
                    editor.surface(),
                    editor.widgets(),
                    editor.value(),
                    &config.placeholder,
                    ViewOptions::default(),
                )
            );
        }
        OutputFormat::Segments => {
            for segment in parse(editor.value()) {
                match segment {
                    Segment::Text { content } => println!("text     {:?}", content),
                    Segment::Variable { name } => println!("variable {}", name),
                }
            }
        }
        OutputFormat::Json => {
            let tags: Vec<_> = editor
                .widgets()
                .iter()
                .map(|w| json!({ "name": w.name(), "display": w.display_text() }))
                .collect();
            let doc = json!({
                "value": editor.value(),
                "segments": parse(editor.value()),
                "tags": tags,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn replay(editor: TemplateEditor, path: &std::path::Path, format: OutputFormat) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let steps = parse_script(&source)?;

    let mut runner = ScriptRunner::new(editor);
    let reports = runner.run(&steps)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("> {}", report.step);
        for change in &report.changes {
            println!("  change  {:?}", change);
        }
        for name in &report.clicked {
            println!("  clicked {}", name);
        }
        println!("  {}", report.view);
    }
    println!("value: {:?}", runner.editor().value());
    Ok(())
}
