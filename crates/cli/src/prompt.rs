//! Renders the launch form on a terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use launchpad_sdk::{FieldDescriptor, FieldName};

/// Ask for every descriptor that has no value yet, in render order.
/// Required fields are asked again until answered.
pub fn prompt_missing<R: BufRead, W: Write>(
    fields: &[FieldDescriptor],
    input: &mut R,
    output: &mut W,
) -> Result<Vec<(FieldName, String)>> {
    let mut edits = Vec::new();

    for field in fields.iter().filter(|f| f.value.is_empty()) {
        loop {
            write!(output, "{}: ", field.label)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input closed before {} was entered", field.label);
            }

            let value = line.trim();
            if value.is_empty() && field.required {
                writeln!(output, "{} is required", field.label)?;
                continue;
            }
            edits.push((field.name, value.to_string()));
            break;
        }
    }

    Ok(edits)
}

/// Print the form as it currently stands
pub fn render<W: Write>(fields: &[FieldDescriptor], output: &mut W) -> Result<()> {
    writeln!(output, "Token LaunchPad")?;
    for field in fields {
        let marker = if field.required { "*" } else { " " };
        writeln!(output, "  {}{:<15} {}", marker, field.label, field.value)?;
    }
    Ok(())
}
