use crate::utils::error::{ProbeError, Result};
use crate::utils::json;
use serde_json::{Map, Value};
use std::fmt;
use std::io::Write;

/// One entry of the sites listing. Only `id` and `name` are ever read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> SiteRecord<'a> {
    pub fn from_value(index: usize, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ProbeError::UnexpectedPayload {
                message: format!("site entry {} is not an object: {}", index, other),
            }),
        }
    }

    pub fn id(&self) -> Option<&'a Value> {
        self.fields.get("id")
    }

    pub fn name(&self) -> Option<&'a Value> {
        self.fields.get("name")
    }
}

impl fmt::Display for SiteRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - Name: {}",
            display_field(self.id()),
            display_field(self.name())
        )
    }
}

/// Missing and null fields print as `None`; strings print unquoted.
fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Outcome of a single probe run.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Backend answered 200 with this payload.
    Config(Value),
    /// Local service answered 200 with this listing, entries not yet checked.
    Sites(Vec<Value>),
    /// Any status other than 200.
    HttpFailure { status: u16, body: Option<String> },
}

impl Report {
    /// Writes the report line by line. A listing entry that is not an object
    /// fails the render after the entries before it have been written.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self {
            Report::Config(payload) => {
                writeln!(out, "{}", json::to_ascii_pretty_string(payload)?)?;
            }
            Report::Sites(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    let site = SiteRecord::from_value(index, entry)?;
                    writeln!(out, "{}", site)?;
                }
            }
            Report::HttpFailure { status, body: Some(body) } => {
                writeln!(out, "Error: {} {}", status, body)?;
            }
            Report::HttpFailure { status, body: None } => {
                writeln!(out, "Error: {}", status)?;
            }
        }
        Ok(())
    }
}
