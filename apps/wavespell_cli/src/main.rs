use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use wavespell::chart::moon_phase_for;
use wavespell::dreamspell::{oracle_for, parse_date, signature_for_kin};
use wavespell::{BirthData, Kin};
use wavespell_config::{load_engine_settings, EngineSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dreamspell signatures and sidereal charts as JSON")]
struct Args {
    /// Settings file (defaults to configs/wavespell.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Galactic signature for a date (today if omitted)
    Kin {
        /// YYYY-MM-DD
        date: Option<String>,
    },
    /// Oracle (destiny, guide, analog, antipode, occult) for a date or kin
    Oracle {
        /// YYYY-MM-DD
        #[arg(required_unless_present = "kin", conflicts_with = "kin")]
        date: Option<String>,
        #[arg(long)]
        kin: Option<u16>,
    },
    /// Signature, oracle and families for a date (today if omitted)
    Reading {
        /// YYYY-MM-DD
        date: Option<String>,
    },
    /// Sidereal chart for a birth moment
    Chart {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM, 24-hour
        #[arg(long, default_value = "12:00")]
        time: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value = "UTC")]
        tz: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Mean moon phase for a date
    Moon {
        /// YYYY-MM-DD
        date: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = load_engine_settings(args.config.as_deref())?;
    log::debug!("settings: {:?}", settings);
    run(&args.command, &settings, args.pretty)
}

fn run(command: &Command, settings: &EngineSettings, pretty: bool) -> anyhow::Result<()> {
    let calendar = settings.calendar();
    match command {
        Command::Kin { date } => print_json(&calendar.signature_for(date_or_today(date)?), pretty),
        Command::Oracle { date, kin } => {
            let kin = match (date, kin) {
                (_, Some(raw)) => Kin::new(*raw)?,
                (Some(date), None) => calendar.kin_for_str(date)?,
                (None, None) => anyhow::bail!("oracle needs a date or --kin"),
            };
            let oracle = oracle_for(kin);
            let report = OracleReport {
                destiny: signature_for_kin(oracle.destiny),
                guide: signature_for_kin(oracle.guide),
                analog: signature_for_kin(oracle.analog),
                antipode: signature_for_kin(oracle.antipode),
                occult: signature_for_kin(oracle.occult),
            };
            print_json(&report, pretty)
        }
        Command::Reading { date } => print_json(&calendar.reading_for(date_or_today(date)?), pretty),
        Command::Chart {
            date,
            time,
            lat,
            lon,
            tz,
            city,
            country,
        } => {
            let birth = BirthData::parse(date, time, *lat, *lon, tz)?
                .with_place(city.clone(), country.clone());
            let chart = settings.sidereal_calculator().generate_chart(&birth)?;
            print_json(&chart, pretty)
        }
        Command::Moon { date } => print_json(&moon_phase_for(parse_date(date)?), pretty),
    }
}

/// Parse `date`, or take the local calendar date when none was given.
fn date_or_today(date: &Option<String>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(raw) => Ok(parse_date(raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Oracle with each position expanded to its full signature.
#[derive(Serialize)]
struct OracleReport {
    destiny: wavespell::GalacticSignature,
    guide: wavespell::GalacticSignature,
    analog: wavespell::GalacticSignature,
    antipode: wavespell::GalacticSignature,
    occult: wavespell::GalacticSignature,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
