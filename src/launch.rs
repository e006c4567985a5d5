//! Hand a query off to an external search engine in the user's browser.

use std::process::{Command, Stdio};

use url::Url;

const LINKEDIN_CONTENT_SEARCH: &str = "https://www.linkedin.com/search/results/content/";
const GOOGLE_SEARCH: &str = "https://www.google.com/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchEngine {
	LinkedIn,
	Google,
}

impl SearchEngine {
	pub(crate) fn label(&self) -> &'static str {
		match self {
			SearchEngine::LinkedIn => "LinkedIn",
			SearchEngine::Google => "Google",
		}
	}

	/// Build the recency-filtered search URL for a query. LinkedIn gets the
	/// content search sorted by date posted; Google gets the past-24-hours
	/// filter.
	pub(crate) fn search_url(&self, query: &str) -> Result<Url, url::ParseError> {
		match self {
			SearchEngine::LinkedIn => Url::parse_with_params(
				LINKEDIN_CONTENT_SEARCH,
				[
					("keywords", query),
					("origin", "FACETED_SEARCH"),
					("sortBy", "\"date_posted\""),
				],
			),
			SearchEngine::Google => {
				Url::parse_with_params(GOOGLE_SEARCH, [("q", query), ("tbs", "qdr:d")])
			}
		}
	}
}

/// Open a URL in a new browsing context via the platform opener. Tries the
/// openers in order; which one exists depends on the platform.
pub(crate) fn open_url(url: &Url) -> Result<(), String> {
	const OPENERS: &[(&str, &[&str])] = &[
		("xdg-open", &[]),
		("open", &[]),
		("cmd", &["/c", "start", ""]),
	];

	for (program, args) in OPENERS {
		let spawned = Command::new(program)
			.args(*args)
			.arg(url.as_str())
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn();
		if spawned.is_ok() {
			return Ok(());
		}
	}

	Err("no browser opener available".to_string())
}
