use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::PathBuf;

use society_core::{FixedClock, FlatDirectory, Lookup, ZonedClock};
use society_entry::{ParseResult, TransactionTextParser};

use crate::config::Config;

#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    pub text: Vec<String>,
    pub json: bool,
    pub flats: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub validate_dates: bool,
    pub legacy_placeholders: bool,
}

pub fn run_parse(cfg: &Config, args: ParseArgs) -> Result<()> {
    let out = parse_to_string(cfg, args)?;
    print!("{out}");
    Ok(())
}

pub fn parse_to_string(cfg: &Config, args: ParseArgs) -> Result<String> {
    let input = args.text.join(" ");
    if input.trim().is_empty() {
        bail!("Please enter a transaction description");
    }

    let mut options = cfg.parser.options();
    options.validate_dates |= args.validate_dates;
    options.legacy_placeholders |= args.legacy_placeholders;

    let flats_path = args
        .flats
        .or_else(|| cfg.parser.flats_file.as_ref().map(PathBuf::from));
    let directory = flats_path
        .as_deref()
        .map(FlatDirectory::load)
        .transpose()
        .context("loading flat directory")?;

    let mut parser = TransactionTextParser::new().with_options(options);
    if let Some(dir) = &directory {
        parser = parser.with_directory(dir);
    }
    parser = match args.today {
        Some(d) => parser.with_clock(FixedClock(d)),
        None => parser.with_clock(ZonedClock::from_name(&cfg.parser.timezone)?),
    };

    let result = parser.parse(&input);
    if args.json {
        let mut s = serde_json::to_string_pretty(&result).context("serialize parse result")?;
        s.push('\n');
        Ok(s)
    } else {
        Ok(render_text(&result))
    }
}

fn lookup_suffix(lookup: &Lookup) -> String {
    match lookup {
        Lookup::Resolved { id } => format!(" ({id})"),
        Lookup::Unmatched { .. } => " (not in directory)".to_string(),
        Lookup::Ambiguous { candidates, .. } => format!(" (one of {})", candidates.join(", ")),
        Lookup::NotAttempted | Lookup::NoToken => String::new(),
    }
}

pub fn render_text(r: &ParseResult) -> String {
    let p = &r.parsed;
    let t = &r.proposed_transaction;
    let mut s = String::new();

    // write! into a String cannot fail
    let _ = writeln!(s, "{}", r.explanation);
    let _ = writeln!(s);
    let _ = writeln!(s, "  id        {}", t.id);
    let _ = writeln!(s, "  date      {}", p.occurred_on);
    let _ = writeln!(s, "  type      {}", p.transaction_type);
    let _ = writeln!(s, "  category  {}", p.category);
    let _ = writeln!(s, "  amount    ₹{}", p.amount);
    let _ = writeln!(s, "  mode      {}", p.payment_mode);
    let _ = writeln!(s, "  apartment {}", t.apartment_id);
    match &p.flat_reference {
        Some(flat) => {
            let _ = writeln!(s, "  flat      {flat}{}", lookup_suffix(&r.resolution.flat));
        }
        None => {
            let _ = writeln!(s, "  flat      -");
        }
    }
    match &p.party_name {
        Some(party) => {
            let _ = writeln!(s, "  party     {party}{}", lookup_suffix(&r.resolution.party));
        }
        None => {
            let _ = writeln!(s, "  party     -");
        }
    }
    let _ = writeln!(s, "  narration {}", t.narration);

    if r.has_warnings() {
        let _ = writeln!(s);
        let _ = writeln!(s, "Warnings:");
        for w in &r.warnings {
            let _ = writeln!(s, "  - {w}");
        }
    }
    s
}
