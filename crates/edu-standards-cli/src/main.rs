mod commands;
mod error;
mod reader;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use commands::field::FieldCheck;

#[derive(Parser)]
#[command(
    name = "edu-check",
    version,
    about = "Educational standards checker for GDPT 2018 and CV 5512 lesson plans, presentations and assessments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate request files (lesson plans, presentations, assessments)
    Validate {
        /// Input path (file or directory, defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,

        /// Config file (defaults to edu-standards.config.yaml in the input directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score free-text lesson content against the standards
    Content {
        /// Content file (plain text or markdown)
        path: PathBuf,

        /// Grade level of the lesson
        #[arg(long, allow_negative_numbers = true)]
        grade: i64,

        /// Subject name, used for recommendations
        #[arg(long, default_value = "")]
        subject: String,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,

        /// Config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a single field value
    Field {
        #[command(subcommand)]
        check: FieldCheck,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            path,
            format,
            config,
        } => match commands::validate::run_validate(&path, &format, config.as_deref()) {
            Ok((output, invalid_count)) => {
                println!("{output}");
                if invalid_count > 0 {
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Content {
            path,
            grade,
            subject,
            format,
            config,
        } => match commands::content::run_content(
            &path,
            grade,
            &subject,
            &format,
            config.as_deref(),
        ) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Field { check } => {
            let (output, valid) = commands::field::run_field(&check);
            println!("{output}");
            if !valid {
                process::exit(1);
            }
        }
    }
}
