use anyhow::Result;
use clap::{Parser, Subcommand};
use rhythmic_core::Pattern;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "rhythmic")]
#[command(about = "Inspect, normalize, and generate rhythmic patterns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show derived properties of a pattern
    Info {
        /// Pattern string, e.g. "x--x--x-" or "|RL-RRL--|"
        pattern: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the canonical core form of a pattern
    Normalize {
        /// Pattern string
        pattern: String,
    },
    /// Generate a maximally even distribution of beats
    Euclid {
        /// Number of beats
        beats: usize,

        /// Number of pulses
        pulses: usize,
    },
    /// Encode a pattern as a duration string
    Durations {
        /// Pattern string
        pattern: String,

        /// Separator between durations
        #[arg(short, long, default_value = "+")]
        separator: String,
    },
    /// Decode a duration string such as "3+3+2" into a pattern
    FromDurations {
        /// Duration string
        durations: String,
    },
}

#[derive(Serialize)]
struct Info {
    pattern: String,
    length: usize,
    beats: usize,
    durations: Vec<usize>,
    divisor: Option<usize>,
    repetitions: usize,
    core: Pattern,
    is_core: bool,
    euclidean: bool,
    odd: bool,
}

impl Info {
    fn of(pattern: &Pattern) -> Info {
        let mut core = pattern.clone();
        core.normalize();
        Info {
            pattern: pattern.to_string(),
            length: pattern.len(),
            beats: pattern.beat_count(),
            durations: pattern.durations(),
            divisor: pattern.divisor(),
            repetitions: pattern.repetitions(),
            is_core: &core == pattern,
            euclidean: Pattern::euclidean(pattern.beat_count(), pattern.len()) == *pattern,
            odd: pattern.odd(),
            core,
        }
    }

    fn print_text(&self) {
        println!("pattern:     {}", self.pattern);
        println!("length:      {}", self.length);
        println!("beats:       {}", self.beats);
        let durations: Vec<String> = self.durations.iter().map(|d| d.to_string()).collect();
        println!("durations:   {}", durations.join("+"));
        match self.divisor {
            Some(d) => println!("divisor:     {}", d),
            None => println!("divisor:     n/a"),
        }
        println!("repetitions: {}", self.repetitions);
        println!("core:        {}", self.core);
        println!("is core:     {}", self.is_core);
        println!("euclidean:   {}", self.euclidean);
        println!("odd:         {}", self.odd);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { pattern, format } => {
            let info = Info::of(&Pattern::from_pattern(&pattern));
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                info.print_text();
            }
        }
        Commands::Normalize { pattern } => {
            let mut r = Pattern::from_pattern(&pattern);
            r.normalize();
            println!("{r}");
        }
        Commands::Euclid { beats, pulses } => {
            println!("{}", Pattern::euclidean(beats, pulses));
        }
        Commands::Durations { pattern, separator } => {
            println!(
                "{}",
                Pattern::from_pattern(&pattern).to_duration_string(&separator)
            );
        }
        Commands::FromDurations { durations } => match Pattern::from_duration_str(&durations) {
            Ok(r) => println!("{r}"),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        },
    }
    Ok(())
}
