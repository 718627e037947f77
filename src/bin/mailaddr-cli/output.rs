#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailaddr_lib::AddressReport;

pub fn write_reports(rows: &[AddressReport], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn human_line(row: &AddressReport) -> String {
    match (&row.canonical, &row.reason) {
        (Some(canonical), _) => format!("[OK]    {} -> {}", row.original, canonical),
        (None, reason) => format!(
            "[INVALID] {} :: {}",
            row.original,
            reason.as_deref().unwrap_or("rejected")
        ),
    }
}

fn write_human(rows: &[AddressReport]) -> Result<()> {
    for row in rows {
        println!("{}", human_line(row));
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[AddressReport], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[AddressReport], _: &Cli) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[AddressReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[AddressReport], _: &Cli) -> Result<()> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[AddressReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[AddressReport], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &AddressReport) -> [&str; 6] {
    [
        row.original.as_str(),
        if row.valid { "true" } else { "false" },
        row.canonical.as_deref().unwrap_or(""),
        row.local.as_str(),
        row.domain.as_str(),
        row.reason.as_deref().unwrap_or(""),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailaddr_lib::check_address;

    #[test]
    fn human_lines() {
        assert_eq!(
            human_line(&check_address("Bob@Example.com")),
            "[OK]    Bob@Example.com -> bob@example.com"
        );
        assert_eq!(
            human_line(&check_address("bob@@example.com")),
            "[INVALID] bob@@example.com :: more than one '@' separator"
        );
    }
}
