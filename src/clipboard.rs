//! Write a query to the system clipboard.
//!
//! OSC52 is attempted first since it survives tmux and ssh sessions, then the
//! usual native tools.

use std::io::Write;
use std::process::{Command, Stdio};

pub(crate) fn copy(text: &str) -> Result<(), String> {
	if osc52_copy(text) {
		return Ok(());
	}
	native_copy(text)
}

fn osc52_copy(text: &str) -> bool {
	use base64::Engine;

	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	let sequence = if std::env::var("TMUX").is_ok() {
		// tmux needs the escape wrapped in a DCS passthrough.
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	};

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(sequence.as_bytes()).is_ok() && stdout.flush().is_ok()
}

fn native_copy(text: &str) -> Result<(), String> {
	const TOOLS: &[(&str, &[&str])] = &[
		("wl-copy", &[]),
		("xclip", &["-selection", "clipboard"]),
		("xsel", &["--clipboard", "--input"]),
		("pbcopy", &[]),
	];

	for (program, args) in TOOLS {
		if *program == "wl-copy" && std::env::var("WAYLAND_DISPLAY").is_err() {
			continue;
		}
		if pipe_to(program, args, text) {
			return Ok(());
		}
	}

	Err("no clipboard tool available".to_string())
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
	let Ok(mut child) = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
	else {
		return false;
	};

	let wrote = child
		.stdin
		.take()
		.map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
		.unwrap_or(false);

	wrote && child.wait().is_ok()
}
