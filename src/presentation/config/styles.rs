use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

/// Named styles, e.g. `"accent": "bold cyan"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(Styles(
            parsed
                .into_iter()
                .map(|(name, spec)| (name, parse_style(&spec)))
                .collect(),
        ))
    }
}

impl Styles {
    /// Style registered under `name`, or the terminal default.
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parse `[modifiers] [fg] [on [modifiers] bg]`. Unknown words are ignored.
pub fn parse_style(spec: &str) -> Style {
    let mut style = Style::default();
    let mut background = false;
    for word in spec.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "on" => background = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" | "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "inverse" | "reversed" => style = style.add_modifier(Modifier::REVERSED),
            color => {
                let Ok(color) = Color::from_str(color) else {
                    continue;
                };
                style = if background {
                    style.bg(color)
                } else {
                    style.fg(color)
                };
            }
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_style_foreground_and_background() {
        assert_eq!(
            parse_style("bold cyan on black"),
            Style::default()
                .fg(Color::Cyan)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_parse_style_hex_and_modifiers() {
        assert_eq!(
            parse_style("italic #0ea5e9"),
            Style::default()
                .fg(Color::Rgb(0x0e, 0xa5, 0xe9))
                .add_modifier(Modifier::ITALIC)
        );
    }

    #[test]
    fn test_parse_style_ignores_unknown_words() {
        assert_eq!(parse_style("sparkly gray"), Style::default().fg(Color::Gray));
        assert_eq!(parse_style(""), Style::default());
    }

    #[test]
    fn test_styles_lookup_falls_back_to_default() {
        let styles: Styles = json5::from_str(r#"{ accent: "magenta" }"#).unwrap();
        assert_eq!(styles.style("accent"), Style::default().fg(Color::Magenta));
        assert_eq!(styles.style("missing"), Style::default());
    }
}
