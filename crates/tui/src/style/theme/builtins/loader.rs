use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

#[derive(Debug)]
pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// One `themes/*.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	error: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: StyleSpec, element: &str| spec.to_style(&format!("{context}.{element}"));
		Ok(Theme {
			header: style(self.header, "header")?,
			row_highlight: style(self.row_highlight, "row_highlight")?,
			prompt: style(self.prompt, "prompt")?,
			empty: style(self.empty, "empty")?,
			highlight: style(self.highlight, "highlight")?,
			error: style(self.error, "error")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations: Vec<ThemeRegistration> = Vec::with_capacity(files.len());
	let mut default: Option<usize> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some(existing) = default {
				bail!(
					"multiple built-in themes are marked as default (`{}` and `{}`)",
					registrations[existing].name,
					registration.name
				);
			}
			default = Some(registrations.len());
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default.map_or(first.theme, |index| registrations[index].theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	let parsed: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	let theme = parsed.styles.into_theme(&format!("{path:?}.styles"))?;
	let registration = parsed
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(parsed.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, parsed.default))
}

const NAMED_COLORS: &[(&str, Color)] = &[
	("reset", Color::Reset),
	("none", Color::Reset),
	("default", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("dark_gray", Color::DarkGray),
	("dark_grey", Color::DarkGray),
	("light_red", Color::LightRed),
	("light_green", Color::LightGreen),
	("light_yellow", Color::LightYellow),
	("light_blue", Color::LightBlue),
	("light_magenta", Color::LightMagenta),
	("light_cyan", Color::LightCyan),
	("white", Color::White),
];

const MODIFIERS: &[(&str, Modifier)] = &[
	("bold", Modifier::BOLD),
	("dim", Modifier::DIM),
	("italic", Modifier::ITALIC),
	("underline", Modifier::UNDERLINED),
	("underlined", Modifier::UNDERLINED),
	("reversed", Modifier::REVERSED),
	("reverse", Modifier::REVERSED),
	("hidden", Modifier::HIDDEN),
	("crossed_out", Modifier::CROSSED_OUT),
	("strikethrough", Modifier::CROSSED_OUT),
];

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(body) = value.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
		return parse_rgb(body);
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let key = normalise_key(value);
	NAMED_COLORS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|(_, color)| *color)
		.with_context(|| format!("unknown colour `{key}`"))
}

fn parse_hex(hex: &str) -> Result<Color> {
	let expanded: Cow<'_, str> = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};
	let channel = |range: std::ops::Range<usize>| {
		expanded
			.get(range)
			.and_then(|digits| u8::from_str_radix(digits, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};
	Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_rgb(body: &str) -> Result<Color> {
	let channels = body
		.split(',')
		.map(|part| {
			let part = part.trim();
			part.parse::<u8>()
				.with_context(|| format!("invalid component `{part}` in rgb() colour"))
		})
		.collect::<Result<Vec<_>>>()?;
	match channels[..] {
		[r, g, b] => Ok(Color::Rgb(r, g, b)),
		_ => bail!(
			"expected three components for rgb() colour, found {}",
			channels.len()
		),
	}
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let key = normalise_key(input);
	MODIFIERS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|(_, modifier)| *modifier)
		.with_context(|| format!("unknown modifier `{key}`"))
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}
