use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde_json::json;

use crate::backend::Suggestions;

/// Command-line arguments accepted by the `jobscout` binary.
#[derive(Parser, Debug)]
#[command(
	name = "jobscout",
	version,
	about = "Generate LinkedIn and Google search queries for a job title"
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "JOBSCOUT_CONFIG",
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long,
		value_name = "ORIGIN",
		env = "JOBSCOUT_BACKEND",
		help = "Origin of the query-generation backend (default: http://127.0.0.1:8000)"
	)]
	pub(crate) backend: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Job title to prefill the form with (default: empty)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Request timeout for backend calls (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "list-themes",
		help = "List the available theme names and exit"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Submit once with the provided title and print the result instead of starting the TUI"
	)]
	pub(crate) once: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for --once mode (default: plain)"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Print a plain-text representation of the suggestions.
pub(crate) fn print_plain(suggestions: &Suggestions) {
	for query in &suggestions.data {
		println!("{query}");
	}

	if !suggestions.additional_job_titles.is_empty() {
		println!();
		println!("Related job titles:");
		for title in &suggestions.additional_job_titles {
			println!("  {title}");
		}
	}
}

/// Format the suggestions as a JSON string.
pub(crate) fn format_suggestions_json(suggestions: &Suggestions) -> Result<String> {
	let payload = json!({
		"queries": suggestions.data,
		"related_titles": suggestions.additional_job_titles,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the suggestions.
pub(crate) fn print_json(suggestions: &Suggestions) -> Result<()> {
	println!("{}", format_suggestions_json(suggestions)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = CliArgs::try_parse_from(["jobscout"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(!parsed.once);
		assert!(parsed.backend.is_none());
	}

	#[test]
	fn parse_cli_accepts_once_mode_with_title() {
		let parsed =
			CliArgs::try_parse_from(["jobscout", "--once", "-t", "Data Scientist", "-o", "json"])
				.expect("parses");
		assert!(parsed.once);
		assert_eq!(parsed.title.as_deref(), Some("Data Scientist"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}

	#[test]
	fn json_format_includes_both_lists() {
		let suggestions = Suggestions {
			data: vec!["q1".into(), "q2".into()],
			additional_job_titles: vec!["Title A".into()],
		};

		let json = format_suggestions_json(&suggestions).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["queries"][1], "q2");
		assert_eq!(value["related_titles"][0], "Title A");
	}
}
