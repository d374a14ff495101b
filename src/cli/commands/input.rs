//! Reading command inputs from files or stdin

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, bail};

/// Path meaning "read stdin"
pub const STDIN: &str = "-";

/// Read a whole input, `-` meaning stdin
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == STDIN {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
}

/// Read two inputs; at most one may be stdin
pub fn read_pair(first: &str, second: &str) -> anyhow::Result<(String, String)> {
    if first == STDIN && second == STDIN {
        bail!("Only one input can be read from stdin");
    }
    Ok((read_input(first)?, read_input(second)?))
}
