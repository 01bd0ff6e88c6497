use std::io::stdin;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use datemark::DateFormat;

/// Parse a date fragment and print it in a display format
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Fragment to parse, e.g. "sept 2 24"; reads stdin lines when omitted
    fragment: Option<String>,

    /// Output format label, e.g. "MM/DD/YY"
    #[arg(short, long, default_value = "YYYY-MM-DD")]
    format: String,

    /// Print the wrapped form used in document text
    #[arg(short, long)]
    wrap: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let format: DateFormat = args.format.parse()?;
    let today = Local::now().date_naive();

    match args.fragment {
        Some(fragment) => report(&fragment, today, format, args.wrap),
        None => {
            let mut line = String::new();
            while stdin().read_line(&mut line)? > 0 {
                report(line.trim(), today, format, args.wrap);
                line.clear();
            }
        }
    }

    Ok(())
}

fn report(fragment: &str, today: NaiveDate, format: DateFormat, wrap: bool) {
    match datemark::parse_fragment(fragment, today) {
        Some(date) => {
            let rendered = datemark::format_date(date, format);
            if wrap {
                println!("{}", datemark::wrap(&rendered));
            } else {
                println!("{rendered}");
            }
        }
        None => println!("no match"),
    }
}
