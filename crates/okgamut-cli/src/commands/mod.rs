//! CLI command implementations

pub mod adjust;
pub mod convert;
pub mod interpolate;
pub mod oklab;

use anyhow::{Context, Result, bail};
use okgamut_core::{Space, Triplet};
use serde::Serialize;

/// Runs `$body` with `$G` bound to the gamut type selected by a
/// [`GamutId`](okgamut_color::GamutId).
macro_rules! with_gamut {
    ($id:expr, $G:ident => $body:expr) => {
        match $id {
            okgamut_color::GamutId::Srgb => {
                type $G = okgamut_core::Srgb;
                $body
            }
            okgamut_color::GamutId::DisplayP3 => {
                type $G = okgamut_core::DisplayP3;
                $body
            }
        }
    };
}
pub(crate) use with_gamut;

/// Where results go: human-readable lines or one JSON document.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints `records` as a JSON array, or each record's text line.
    pub fn emit<R: Serialize>(&self, records: &[R], text: impl Fn(&R) -> String) -> Result<()> {
        if self.json {
            let doc = serde_json::to_string_pretty(records).context("Failed to serialize output")?;
            println!("{doc}");
        } else {
            for r in records {
                println!("{}", text(r));
            }
        }
        Ok(())
    }
}

/// Parses device colors from positional arguments.
///
/// Accepts one color per argument (`"255 0 0"`, `"255,0,0"`) or bare
/// channel values in groups of three (`255 0 0 0 255 0`). Every channel
/// must lie in 0..=255.
pub fn parse_colors<S: Space>(args: &[String]) -> Result<Vec<Triplet<S, i32>>> {
    let bare = args.iter().all(|a| a.trim().parse::<i32>().is_ok());

    let colors: Vec<Triplet<S, i32>> = if bare {
        if args.len() % 3 != 0 {
            bail!(
                "expected channel values in groups of three, got {} values",
                args.len()
            );
        }
        args.chunks(3)
            .map(|c| parse_color(&c.join(" ")))
            .collect::<Result<_>>()?
    } else {
        args.iter().map(|a| parse_color(a)).collect::<Result<_>>()?
    };

    Ok(colors)
}

/// Parses and range-checks a single device color.
pub fn parse_color<S: Space>(s: &str) -> Result<Triplet<S, i32>> {
    let color: Triplet<S, i32> = s
        .parse()
        .with_context(|| format!("Invalid {} color", S::NAME))?;
    color
        .validate_byte_range()
        .with_context(|| format!("Invalid {} color '{s}'", S::NAME))?;
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use okgamut_core::Srgb;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_bare_values() {
        let colors = parse_colors::<Srgb>(&strings(&["255", "0", "0", "0", "0", "255"])).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].to_array(), [0, 0, 255]);
    }

    #[test]
    fn test_parse_strings() {
        let colors = parse_colors::<Srgb>(&strings(&["255,0,0", "1 2 3"])).unwrap();
        assert_eq!(colors[0].to_array(), [255, 0, 0]);
        assert_eq!(colors[1].to_array(), [1, 2, 3]);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse_colors::<Srgb>(&strings(&["255", "0"])).is_err());
        assert!(parse_colors::<Srgb>(&strings(&["256", "0", "0"])).is_err());
        assert!(parse_colors::<Srgb>(&strings(&["-1,0,0"])).is_err());
        assert!(parse_colors::<Srgb>(&strings(&["red"])).is_err());
    }
}
