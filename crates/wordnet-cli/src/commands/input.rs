//! Whitespace-token input shared by the pair commands.

use std::io::BufRead;

use anyhow::{bail, Context, Result};

/// All whitespace-separated tokens of `input`.
pub fn read_tokens<R: BufRead>(input: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

/// Group `items` into consecutive pairs.
pub fn into_pairs<T>(items: Vec<T>) -> Result<Vec<(T, T)>> {
    if items.len() % 2 != 0 {
        bail!("expected pairs, got an odd number of operands ({})", items.len());
    }
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(a), Some(b)) = (iter.next(), iter.next()) {
        pairs.push((a, b));
    }
    Ok(pairs)
}
