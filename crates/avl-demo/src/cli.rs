//! Logic behind the `avl-demo` binary.
//!
//! Usage:
//!   avl-demo [--list] [--format text|json] [--json] <scenario>

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::DemoError;
use crate::scenario;
use crate::shape::Shape;
use crate::walkthrough::{self, Walkthrough};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, DemoError> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(DemoError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub list: bool,
    pub format: Format,
    pub scenario: Option<String>,
}

/// Parses arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<CliOptions, DemoError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => options.list = true,
            "--json" => options.format = Format::Json,
            "--format" => {
                let value = args.next().ok_or(DemoError::MissingFormat)?;
                options.format = value.parse()?;
            }
            flag if flag.starts_with("--") => {
                return Err(DemoError::UnknownOption(flag.to_string()));
            }
            name => {
                if options.scenario.is_some() {
                    return Err(DemoError::UnknownOption(name.to_string()));
                }
                options.scenario = Some(name.to_string());
            }
        }
    }
    Ok(options)
}

/// Produces everything the binary writes to stdout.
pub fn run(options: &CliOptions) -> Result<String, DemoError> {
    if options.list {
        return Ok(scenario::names().collect::<Vec<_>>().join("\n"));
    }
    let name = options
        .scenario
        .as_deref()
        .ok_or(DemoError::MissingScenario)?;
    let walkthrough = walkthrough::run(scenario::find(name)?)?;
    match options.format {
        Format::Text => render_text(&walkthrough),
        Format::Json => render_json(&walkthrough),
    }
}

pub fn render_text(walkthrough: &Walkthrough) -> Result<String, DemoError> {
    let mut out = format!("{}\n{}\n", walkthrough.scenario, walkthrough.explanation);
    for (i, step) in walkthrough.steps.iter().enumerate() {
        let shape = Shape::from_links(&step.snapshot)?;
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\n[{}] {}: {}\n{}\n",
            i + 1,
            step.state.as_str(),
            step.description,
            shape.render()
        );
    }
    Ok(out)
}

pub fn render_json(walkthrough: &Walkthrough) -> Result<String, DemoError> {
    Ok(serde_json::to_string_pretty(walkthrough)?)
}
