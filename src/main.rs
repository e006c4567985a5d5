mod app;
mod app_dirs;
mod backend;
mod cli;
mod clipboard;
mod form;
mod input;
mod launch;
mod logging;
mod settings;
mod submit;
mod theme;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use form::{FieldPatch, JobForm};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	logging::initialize()?;

	if cli.once {
		return run_once(cli.output, resolved);
	}

	app::run(&resolved)
}

/// Perform a single submission without entering the TUI and print the
/// suggestions in the chosen format.
fn run_once(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	use backend::SuggestService;

	let client = backend::BackendClient::new(settings.backend.clone())?;
	let mut form = JobForm::default();
	if let Some(title) = &settings.initial_title {
		form.apply(FieldPatch::JobTitle(title.clone()));
	}
	let suggestions = client.suggest(&form)?;

	match format {
		OutputFormat::Plain => print_plain(&suggestions),
		OutputFormat::Json => print_json(&suggestions)?,
	}

	Ok(())
}
