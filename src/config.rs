use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};

use crate::maze::MIN_DIMENSION;

/// Largest width or height accepted from the user, to bound image memory.
pub const MAX_DIMENSION: u16 = 3841;
/// File written when the user does not name one.
pub const DEFAULT_OUTPUT: &str = "maze.bmp";
/// Prefix added to the file name of the solved image.
pub const SOLVED_PREFIX: &str = "SOLVED_";

/// Everything needed for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub output: PathBuf,
    pub solve: bool,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 65,
            height: 37,
            output: PathBuf::from(DEFAULT_OUTPUT),
            solve: true,
            seed: None,
        }
    }
}

/// Rounds an even value up to the next odd one and clamps it into
/// `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn normalize_dimension(raw: i64) -> u16 {
    let odd = if raw % 2 == 0 {
        raw.saturating_add(1)
    } else {
        raw
    };
    odd.clamp(MIN_DIMENSION as i64, MAX_DIMENSION as i64) as u16
}

fn parse_dimension(s: &str) -> Result<u16, String> {
    let raw = s
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not a whole number", s.trim()))?;
    let normalized = normalize_dimension(raw);
    if normalized as i64 != raw {
        tracing::warn!("[config] dimension {} adjusted to {}", raw, normalized);
    }
    Ok(normalized)
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        other => Err(format!("'{}' is not 0 or 1", other)),
    }
}

impl Config {
    /// Builds a configuration from command line arguments (without the executable name):
    /// `<width> <height> [file] [solve]` plus an optional `--seed <n>` anywhere.
    ///
    /// Returns `Ok(None)` when no positional arguments were given, so the caller can fall
    /// back to [`Config::prompt`].
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut seed = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "--seed" {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed '{}'", value))?,
                );
            } else {
                positional.push(arg);
            }
        }

        let mut config = Config {
            seed,
            ..Config::default()
        };
        match positional.as_slice() {
            [] => return Ok(None),
            [_] => bail!("expected both a width and a height"),
            [width, height, rest @ ..] => {
                config.width = parse_dimension(width).map_err(anyhow::Error::msg)?;
                config.height = parse_dimension(height).map_err(anyhow::Error::msg)?;
                if let Some(output) = rest.first() {
                    config.output = PathBuf::from(output);
                }
                if let Some(flag) = rest.get(1) {
                    config.solve = parse_flag(flag).map_err(anyhow::Error::msg)?;
                }
                if rest.len() > 2 {
                    bail!("unexpected argument '{}'", rest[2]);
                }
            }
        }
        Ok(Some(config))
    }

    /// Asks for width, height, file name and the solution flag, one line each.
    /// Returns `Ok(None)` if the input ends before every answer was given.
    pub fn prompt<R: BufRead, W: Write>(
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<Option<Self>> {
        let Some(width) =
            prompt_with_validation(input, output, "Enter your desired width: ", parse_dimension)?
        else {
            return Ok(None);
        };
        let Some(height) =
            prompt_with_validation(input, output, "Enter your desired height: ", parse_dimension)?
        else {
            return Ok(None);
        };

        let file_question = format!(
            "Enter a file name for the {}x{} bmp (empty for {}): ",
            width, height, DEFAULT_OUTPUT
        );
        let Some(output_path) = prompt_with_validation(input, output, &file_question, |s| {
            let s = s.trim();
            if s.is_empty() {
                Ok(PathBuf::from(DEFAULT_OUTPUT))
            } else {
                Ok(PathBuf::from(s))
            }
        })?
        else {
            return Ok(None);
        };

        let Some(solve) = prompt_with_validation(
            input,
            output,
            "Enter 0 if you don't want to generate a solution, else 1: ",
            parse_flag,
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Config {
            width,
            height,
            output: output_path,
            solve,
            seed: None,
        }))
    }

    /// Path of the solved image: the output file name with [`SOLVED_PREFIX`] in front,
    /// in the same directory.
    pub fn solved_output(&self) -> PathBuf {
        let name = self
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        self.output.with_file_name(format!("{}{}", SOLVED_PREFIX, name))
    }
}

/// Print `prompt` and read lines until `validate` accepts one.
/// The validation message is printed after every rejected line.
/// Returns `None` if the input is exhausted first.
fn prompt_with_validation<R, W, F, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    validate: F,
) -> std::io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match validate(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(msg) => writeln!(output, "{}", msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(64), 65);
        assert_eq!(normalize_dimension(35), 35);
        assert_eq!(normalize_dimension(0), 5);
        assert_eq!(normalize_dimension(-7), 5);
        assert_eq!(normalize_dimension(4), 5);
        assert_eq!(normalize_dimension(3841), 3841);
        assert_eq!(normalize_dimension(3842), 3841);
        assert_eq!(normalize_dimension(i64::MAX), 3841);
    }

    #[test]
    fn test_from_args_full() {
        let config = Config::from_args(["64", "36", "out.bmp", "0", "--seed", "9"])
            .unwrap()
            .unwrap();
        assert_eq!(
            config,
            Config {
                width: 65,
                height: 37,
                output: PathBuf::from("out.bmp"),
                solve: false,
                seed: Some(9),
            }
        );
    }

    #[test]
    fn test_from_args_defaults() {
        let config = Config::from_args(["5", "5"]).unwrap().unwrap();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.solve);
        assert_eq!(config.seed, None);
        assert_eq!(Config::from_args(Vec::<String>::new()).unwrap(), None);
    }

    #[test]
    fn test_from_args_errors() {
        assert!(Config::from_args(["5"]).is_err());
        assert!(Config::from_args(["five", "5"]).is_err());
        assert!(Config::from_args(["5", "5", "a.bmp", "maybe"]).is_err());
        assert!(Config::from_args(["5", "5", "--seed"]).is_err());
        assert!(Config::from_args(["5", "5", "a.bmp", "1", "extra"]).is_err());
    }

    #[test]
    fn test_prompt_retries_invalid_answers() {
        let mut input = "abc\n20\n9\n\nx\n1\n".as_bytes();
        let mut output = Vec::new();
        let config = Config::prompt(&mut input, &mut output).unwrap().unwrap();
        assert_eq!((config.width, config.height), (21, 9));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.solve);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("'abc' is not a whole number"));
        assert!(transcript.contains("'x' is not 0 or 1"));
    }

    #[test]
    fn test_prompt_stops_at_end_of_input() {
        let mut input = "21\n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(Config::prompt(&mut input, &mut output).unwrap(), None);
    }

    #[test]
    fn test_solved_output() {
        let config = Config {
            output: PathBuf::from("out/dir/maze.bmp"),
            ..Config::default()
        };
        assert_eq!(config.solved_output(), PathBuf::from("out/dir/SOLVED_maze.bmp"));
    }
}
