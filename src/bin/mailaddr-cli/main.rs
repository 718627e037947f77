mod args;
mod inspect;
mod logging;
mod output;
mod sort;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use mailaddr_lib::{AddressReport, check_address, parse};

use crate::args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut rows: Vec<AddressReport> = Vec::new();

    match &cli.cmd {
        Some(Commands::Validate { email }) => rows.push(check_address(email)),
        Some(Commands::Compare { a, b }) => return run_compare(a, b),
        Some(Commands::Sort {
            dedup,
            group_by_domain,
        }) => return run_sort(*dedup, *group_by_domain),
        Some(Commands::Hash { email }) => return run_hash(email),
        None if cli.stdin => {
            for line in io::stdin().lock().lines() {
                let line = line.context("read stdin")?;
                let raw = line.trim();
                if !raw.is_empty() {
                    rows.push(check_address(raw));
                }
            }
        }
        None => {
            Cli::clap_command().print_help()?;
            println!();
            return Ok(());
        }
    }

    for row in &rows {
        logging::report(row);
    }
    output::write_reports(&rows, &cli)?;

    // exit codes: 0 all valid, 2 some invalid, 1 fatal
    let invalid = rows.iter().filter(|r| !r.valid).count();
    logging::summary(rows.len(), invalid);
    if invalid > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn run_compare(a: &str, b: &str) -> Result<()> {
    let a = parse(a).with_context(|| format!("first address '{a}'"))?;
    let b = parse(b).with_context(|| format!("second address '{b}'"))?;
    for line in inspect::compare_lines(&a, &b) {
        println!("{line}");
    }
    Ok(())
}

fn run_sort(dedup: bool, group_by_domain: bool) -> Result<()> {
    let emails = sort::read_addresses(io::stdin().lock())?;
    for line in sort::render(&sort::order(emails, dedup, group_by_domain), group_by_domain) {
        println!("{line}");
    }
    Ok(())
}

fn run_hash(email: &str) -> Result<()> {
    let email = parse(email).with_context(|| format!("address '{email}'"))?;
    for line in inspect::hash_lines(&email) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submodules_are_wired_into_the_binary() {
        let cli =
            <Cli as clap::Parser>::try_parse_from(["mailaddr-cli", "compare", "a@b.co", "b@b.co"])
                .expect("valid args");
        let Some(Commands::Compare { a, b }) = cli.cmd else {
            panic!("expected compare");
        };
        let (a, b) = (parse(&a).expect("valid"), parse(&b).expect("valid"));
        assert_eq!(inspect::compare_lines(&a, &b)[0], "compare: -1");

        let emails = sort::read_addresses("b@b.co\na@b.co\n".as_bytes()).expect("valid input");
        assert_eq!(
            sort::render(&sort::order(emails, false, false), false),
            vec!["a@b.co", "b@b.co"]
        );
        assert!(output::human_line(&check_address("bad")).starts_with("[INVALID]"));
        logging::report(&check_address("a@b.co"));
    }
}
