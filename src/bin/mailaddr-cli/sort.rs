use std::io::BufRead;

use anyhow::{Context, Result};
use mailaddr_lib::{EmailAddress, domain_ne, ordering, parse};

/// Parses every non-blank line; the first invalid one aborts the batch.
pub fn read_addresses<R: BufRead>(input: R) -> Result<Vec<EmailAddress>> {
    let mut out = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("read stdin")?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let email = parse(raw).with_context(|| format!("line {}", idx + 1))?;
        out.push(email);
    }
    Ok(out)
}

/// Index order, or domain-major order when grouping.
pub fn order(
    mut emails: Vec<EmailAddress>,
    dedup: bool,
    group_by_domain: bool,
) -> Vec<EmailAddress> {
    if group_by_domain {
        emails.sort_by(|a, b| a.domain().cmp(b.domain()).then_with(|| a.cmp(b)));
    } else {
        emails.sort();
    }
    if dedup {
        emails.dedup_by(|a, b| ordering::eq(a, b));
    }
    emails
}

pub fn render(emails: &[EmailAddress], group_by_domain: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(emails.len());
    let mut previous: Option<&EmailAddress> = None;
    for email in emails {
        if group_by_domain && previous.is_none_or(|p| domain_ne(p, email)) {
            lines.push(format!("# {}", email.domain()));
        }
        lines.push(email.to_string());
        previous = Some(email);
    }
    lines
}
