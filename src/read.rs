use crate::dense::Mat;
use crate::system::System;

use anyhow::{format_err, Context, Result};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Reads a system in plain text: the order `n`, then the `n*n` coefficients
/// row by row, then the `n` right-hand side values, all whitespace
/// separated.
pub fn read_system<R: Read>(mut reader: R) -> Result<System> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let n: usize = match tokens.next() {
        Some(tok) => tok
            .parse()
            .with_context(|| format!("invalid system order '{}'", tok))?,
        None => return Err(format_err!("empty input: expected system order")),
    };

    n.checked_mul(n)
        .and_then(|nn| nn.checked_add(n))
        .ok_or_else(|| format_err!("system order {} is too large", n))?;

    let mut next_value = |what: &str| -> Result<f64> {
        let tok = tokens
            .next()
            .ok_or_else(|| format_err!("unexpected end of input: expected {}", what))?;
        tok.parse::<f64>()
            .with_context(|| format!("invalid {} '{}'", what, tok))
    };

    // grown per token; `n` is untrusted
    let mut values = Vec::new();
    for i in 0..n {
        for j in 0..n {
            values.push(next_value(&format!("coefficient a[{}][{}]", i, j))?);
        }
    }
    let mut rhs = Vec::new();
    for i in 0..n {
        rhs.push(next_value(&format!("rhs b[{}]", i))?);
    }
    if let Some(tok) = tokens.next() {
        return Err(format_err!("unexpected trailing input '{}'", tok));
    }

    let a = Mat::new(n, n).values(values).build()?;
    Ok(System::new(a, rhs)?)
}

/// Reads a system from the file at `path`.
pub fn load_system(path: &Path) -> Result<System> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_system(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

/// Writes `sys` in the format accepted by [`read_system`].
pub fn write_system<W: Write>(mut w: W, sys: &System) -> Result<()> {
    let n = sys.order();
    writeln!(w, "{}", n)?;
    for i in 0..n {
        let row: Vec<String> = sys
            .coefficients()
            .row(i)
            .iter()
            .map(|v| format!("{:e}", v))
            .collect();
        writeln!(w, "{}", row.join(" "))?;
    }
    let rhs: Vec<String> = sys.rhs().iter().map(|v| format!("{:e}", v)).collect();
    writeln!(w, "{}", rhs.join(" "))?;
    Ok(())
}
