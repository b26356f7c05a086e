use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commitlog::changelog::Changelog;
use commitlog::config;
use commitlog::git::Git2Repository;
use commitlog::release::{self, ReleaseOptions, VersionFile};
use commitlog::{ui, walker};

#[derive(Parser)]
#[command(
    name = "commitlog",
    about = "Generate categorized changelogs from git history and manage release versions"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a changelog from the commit history (default)
    Log {
        #[arg(short, long, default_value = ".", help = "Path to the repository")]
        path: String,

        #[arg(
            short,
            long,
            help = "Revision (ex. HEAD, HEAD~2, a hash) to start collecting commits from"
        )]
        start: Option<String>,

        #[arg(
            short,
            long,
            help = "Revision to stop collecting commits at (excluded from output)"
        )]
        end: Option<String>,

        #[arg(short, long, help = "Commit types to include, joined by '|' or ','")]
        inclusions: Option<String>,

        #[arg(long, help = "Skip classification and list every change")]
        skip: bool,

        #[arg(short, long, help = "Write the changelog to a file instead of stdout")]
        out: Option<PathBuf>,
    },
    /// Compute and store the next release version
    Release {
        #[arg(short, long, default_value = ".", help = "Path to the project directory")]
        path: String,

        #[arg(long, help = "Increment the major version")]
        major: bool,

        #[arg(long, help = "Increment the minor version")]
        minor: bool,

        #[arg(long, help = "Increment the patch version")]
        patch: bool,

        #[arg(long, help = "Mark the release as a pre-release")]
        prerelease: bool,

        #[arg(long, help = "Pre-release label to use (eg: beta, dev, canary)")]
        suffix: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Some(Command::Release {
            path,
            major,
            minor,
            patch,
            prerelease,
            suffix,
        }) => run_release(
            &config,
            &path,
            ReleaseOptions {
                major,
                minor,
                patch,
                prerelease,
                prerelease_suffix: suffix,
            },
        ),
        Some(Command::Log {
            path,
            start,
            end,
            inclusions,
            skip,
            out,
        }) => run_log(&config, &path, start, end, inclusions, skip, out),
        None => run_log(&config, ".", None, None, None, false, None),
    };

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_log(
    config: &config::Config,
    path: &str,
    start: Option<String>,
    end: Option<String>,
    inclusions: Option<String>,
    skip: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let repo = Git2Repository::open(path)?;

    let records = walker::collect_commits(&repo, start.as_deref(), end.as_deref())?;

    let inclusions = inclusions.unwrap_or_else(|| config.changelog.inclusions.clone());
    let skip = skip || config.changelog.skip_classification;

    let mut changelog = Changelog::new(&inclusions, skip);
    for record in &records {
        changelog.add(record);
    }

    let markdown = changelog.to_markdown();

    match out {
        Some(file) => {
            fs::write(&file, &markdown)?;
            ui::display_success(&format!("Changelog written to {}", file.display()));
        }
        None => println!("{}", markdown),
    }

    Ok(())
}

fn run_release(config: &config::Config, path: &str, options: ReleaseOptions) -> Result<()> {
    let file = VersionFile::at(PathBuf::from(path).join(&config.release.file));

    let outcome = release::run(&file, &options)?;

    if outcome.initialized {
        ui::display_bullet("Initializing commitlog release");
        ui::display_success(&format!("Created {}", file.path().display()));
        ui::display_status(
            "Modify the file to match the current latest version, or leave it as is for a new project",
        );
    }

    ui::display_version_change(&outcome.current, &outcome.next);

    Ok(())
}
