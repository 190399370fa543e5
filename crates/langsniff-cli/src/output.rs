//! Human and JSON report formatting.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use langsniff_core::{Detection, DetectionSource, LanguageTag};

/// Outcome of classifying one input.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub outcome: Result<Detection, String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<LanguageTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detected_by: Option<&'a DetectionSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Write reports for humans.
///
/// A lone input prints just its language so the output can be captured in
/// scripts; several inputs print `name: language` per line. Read errors
/// go to stderr.
pub fn write_human<W: Write>(out: &mut W, reports: &[Report], explain: bool) -> Result<()> {
    let bare = reports.len() == 1;
    for report in reports {
        match &report.outcome {
            Ok(detection) => {
                let language = detection.language.as_str();
                let language = if detection.language.is_fallback() {
                    language.dimmed()
                } else {
                    language.green().bold()
                };
                let reason = if explain {
                    format!(" ({})", describe(&detection.source))
                } else {
                    String::new()
                };
                if bare {
                    writeln!(out, "{}{}", language, reason.dimmed())?;
                } else {
                    writeln!(out, "{}: {}{}", report.name, language, reason.dimmed())?;
                }
            }
            Err(message) => {
                eprintln!("{} {}", "error:".red().bold(), message);
            }
        }
    }
    Ok(())
}

/// Write reports as a pretty-printed JSON array, errors included.
pub fn write_json<W: Write>(out: &mut W, reports: &[Report]) -> Result<()> {
    let entries: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(detection) => JsonReport {
                path: &report.name,
                language: Some(detection.language),
                detected_by: Some(&detection.source),
                error: None,
            },
            Err(message) => JsonReport {
                path: &report.name,
                language: None,
                detected_by: None,
                error: Some(message),
            },
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

/// Write the tag list, one per line or as a JSON array.
pub fn write_languages<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &LanguageTag::ALL)?;
        writeln!(out)?;
    } else {
        for tag in LanguageTag::ALL {
            writeln!(out, "{}", tag)?;
        }
    }
    Ok(())
}

fn describe(source: &DetectionSource) -> String {
    match source {
        DetectionSource::Hint => "declared".to_string(),
        DetectionSource::Rule(name) => format!("matched {}", name),
        DetectionSource::Fallback => "no match".to_string(),
    }
}
