//! Named styles, written as `"bold yellow on black"`

use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `key`, or the terminal default.
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| parse_style(&raw).map(|style| (key, style)))
            .collect::<Result<_, _>>()
            .map_err(serde::de::Error::custom)?;

        Ok(Styles(styles))
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`.
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let raw = raw.to_ascii_lowercase();
    let (foreground, background) = match raw.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None if raw.starts_with("on ") => ("", raw.strip_prefix("on ")),
        None => (raw.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(bg) = background {
        style = style.bg(parse_color(bg.trim())?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Unknown color `{word}`"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("", Style::default())]
    #[case("yellow", Style::default().fg(Color::Yellow))]
    #[case("bold white on blue", Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))]
    #[case("on black", Style::default().bg(Color::Black))]
    #[case("dim italic", Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC))]
    #[case("#ff0000", Style::default().fg(Color::Rgb(255, 0, 0)))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), Ok(expected));
    }

    #[test]
    fn test_parse_style_unknown_color() {
        assert!(parse_style("bold chartreuse-ish").is_err());
    }

    #[test]
    fn test_style_lookup_falls_back_to_default() {
        let styles: Styles =
            json5::from_str(r#"{ "figure": "bold white on blue" }"#).unwrap_or_default();
        assert_eq!(styles.style("figure").bg, Some(Color::Blue));
        assert_eq!(styles.style("missing"), Style::default());
    }
}
