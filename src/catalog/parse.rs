use super::Catalog;
use super::Record;
use crate::FALSE_FLAG;
use crate::TRUE_FLAG;
use anyhow::bail;
use std::collections::HashSet;

impl Catalog {
    /// Parses comma-separated text. The first header column is the label,
    /// every other column is a feature whose values must be `0` or `1`.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());
        let Some((_, header)) = lines.next() else {
            bail!("catalog is empty");
        };
        let header = fields(header)?;
        if header[0].is_empty() {
            bail!("header has no label column");
        }
        let features = header[1..].to_vec();
        let mut seen = HashSet::new();
        for feature in features.iter() {
            if feature.is_empty() {
                bail!("header has an unnamed feature column");
            }
            if !seen.insert(feature.as_str()) {
                bail!("duplicate feature {:?}", feature);
            }
        }
        let mut records = Vec::new();
        for (n, line) in lines {
            let row = fields(line).map_err(|e| anyhow::anyhow!("line {}: {}", n, e))?;
            if row.len() != header.len() {
                bail!(
                    "line {}: expected {} fields, found {}",
                    n,
                    header.len(),
                    row.len()
                );
            }
            let mut row = row.into_iter();
            let label = row.next().unwrap_or_default();
            if label.is_empty() {
                bail!("line {}: empty label", n);
            }
            let mut flags = Vec::with_capacity(features.len());
            for (feature, value) in features.iter().zip(row) {
                flags.push((feature.clone(), flag(&value).map_err(|e| {
                    anyhow::anyhow!("line {}: feature {:?}: {}", n, feature, e)
                })?));
            }
            records.push(Record::new(label, flags));
        }
        Ok(Self::new(features, records))
    }
}

fn flag(value: &str) -> anyhow::Result<bool> {
    match value {
        TRUE_FLAG => Ok(true),
        FALSE_FLAG => Ok(false),
        other => bail!("expected {} or {}, found {:?}", TRUE_FLAG, FALSE_FLAG, other),
    }
}

/// Splits one line into fields. Unquoted fields are trimmed; double-quoted
/// fields keep their content exactly, may contain commas, and read `""` as
/// a literal quote.
fn fields(line: &str) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut closed = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => {
                quoted = false;
                closed = true;
            }
            ('"', false) if !closed && field.trim().is_empty() => {
                field.clear();
                quoted = true;
            }
            (',', false) => {
                out.push(finish(std::mem::take(&mut field), closed));
                closed = false;
            }
            (c, false) if closed && c.is_whitespace() => {}
            (c, _) => field.push(c),
        }
    }
    if quoted {
        bail!("unterminated quote");
    }
    out.push(finish(field, closed));
    Ok(out)
}

fn finish(field: String, quoted: bool) -> String {
    match quoted {
        true => field,
        false => field.trim().to_string(),
    }
}
