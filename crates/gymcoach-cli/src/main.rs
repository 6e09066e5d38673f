//! Visual AI Gym Coach CLI
//!
//! Thin wrapper around gymcoach-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Preview the card stack layout at a few scroll positions
//! gymcoach stack --items 4 --progress 0 --progress 0.75
//!
//! # Log in (stored locally; checked remotely only if GYMCOACH_LOGIN_URL is set)
//! gymcoach login lifter@example.com --password hunter2
//!
//! # Compare your squat against a trainer's
//! gymcoach analyze --trainer trainer.mp4 --user me.mp4 --exercise Squat
//!
//! # Ask for a corrected-form image
//! gymcoach --generate-url http://localhost:8000/generate \
//!     generate --image frame.jpg --error-description "knees caving in"
//!
//! # One-shot or interactive chat with the coach
//! gymcoach chat "How deep should I squat?"
//! gymcoach chat
//!
//! # Past analyses, newest first
//! gymcoach history
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gymcoach_core::scroll_stack::DEFAULT_SHRINK_STEP;
use gymcoach_core::{
    default_data_dir, AnalysisResponse, ChatLog, Coach, CoachConfig, CoachError, MediaFile,
    MediaKind, ProgressFn, Role, StackConfig, StackLayout,
};
use tokio::io::AsyncBufReadExt;

/// Visual AI Gym Coach - exercise form analysis from the terminal
#[derive(Parser)]
#[command(name = "gymcoach")]
#[command(version)]
#[command(about = "Visual AI Gym Coach - exercise form analysis")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: ~/.gymcoach/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override GYMCOACH_ANALYZE_URL
    #[arg(long, global = true)]
    analyze_url: Option<String>,

    /// Override GYMCOACH_GENERATE_URL
    #[arg(long, global = true)]
    generate_url: Option<String>,

    /// Override GYMCOACH_CHAT_URL
    #[arg(long, global = true)]
    chat_url: Option<String>,

    /// Override GYMCOACH_LOGIN_URL
    #[arg(long, global = true)]
    login_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scroll-stack transform table
    Stack {
        /// Number of cards
        #[arg(short = 'n', long, default_value_t = 4)]
        items: usize,

        /// Scale lost per card buried above (default from GYMCOACH_SHRINK_STEP)
        #[arg(long)]
        step: Option<f64>,

        /// Scroll positions to evaluate, 0.0 to 1.0 (repeatable)
        #[arg(short, long)]
        progress: Vec<f64>,
    },

    /// Log in with an email and password
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the logged-in user
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Compare a user video against a trainer video
    Analyze {
        /// Reference video of the trainer
        #[arg(long)]
        trainer: PathBuf,

        /// Video of the user performing the exercise
        #[arg(long)]
        user: PathBuf,

        /// Exercise name, e.g. Squat
        #[arg(short, long)]
        exercise: String,

        /// Print the raw JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Generate a corrected-form image from a user frame
    Generate {
        #[arg(short, long)]
        image: PathBuf,

        #[arg(short, long)]
        exercise: Option<String>,

        /// What is wrong with the form
        #[arg(long)]
        error_description: Option<String>,

        /// Output file (default: corrected_image.<ext> in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Chat with the coach; starts an interactive session without a message
    Chat { message: Option<String> },

    /// List past analyses
    History {
        /// Delete the entry with this ID instead of listing
        #[arg(long)]
        delete: Option<String>,
    },
}

/// Environment config with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<CoachConfig> {
    let mut config = CoachConfig::from_env().context("Invalid GYMCOACH_* environment")?;
    if let Some(url) = &cli.analyze_url {
        config = config.with_analyze_url(url);
    }
    if let Some(url) = &cli.generate_url {
        config = config.with_generate_url(url);
    }
    if let Some(url) = &cli.chat_url {
        config = config.with_chat_url(url);
    }
    if let Some(url) = &cli.login_url {
        config = config.with_login_url(url);
    }
    Ok(config)
}

/// Turn a core error into the line the user sees, keeping details in the log.
///
/// Remote failures collapse to the generic notification; local ones keep
/// their own message.
fn user_error(e: CoachError) -> anyhow::Error {
    tracing::debug!("Command failed: {:?}", e);
    if e.is_remote() {
        anyhow::anyhow!(e.user_message())
    } else {
        anyhow::anyhow!(e.to_string())
    }
}

/// Upload progress rendered as a single rewritten stderr line.
fn progress_printer() -> ProgressFn {
    Arc::new(|percent| {
        eprint!("\rUploading... {:>3}%", percent);
        if percent == 100 {
            eprintln!();
        }
        let _ = std::io::stderr().flush();
    })
}

fn print_stack_table(layout: &StackLayout, progress: &[f64]) {
    print!("{:<6}{:<16}{:<9}{:<8}", "Card", "Range", "Target", "Offset");
    for p in progress {
        print!("{:<10}", format!("@{:.2}", p));
    }
    println!();

    for item in layout.items() {
        let range = format!("({:.3}, {:.3})", item.range.start, item.range.end);
        print!(
            "{:<6}{:<16}{:<9.3}{:<8}",
            item.index,
            range,
            item.target_scale,
            format!("{}px", item.offset_px)
        );
        for p in progress {
            print!("{:<10.4}", item.scale_at(*p));
        }
        println!();
    }
    println!();
    println!("Container height: {}vh", layout.container_height_vh());
}

fn print_analysis(result: &AnalysisResponse) {
    println!("Frames analysed: {}", result.analysis.len());
    if let Some(mean) = result.mean_error_score() {
        println!("Mean error score: {:.1}/100", mean);
    }
    for frame in &result.analysis {
        println!();
        println!("Frame #{}  (error score {}/100)", frame.frame_id, frame.score_label());
        if !frame.feedback.is_empty() {
            println!("  {}", frame.feedback);
        }
        if !frame.technical_observation.is_empty() {
            println!("  {}", frame.technical_observation);
        }
    }
    if !result.feedback_summary.is_empty() {
        println!();
        println!("Summary:");
        println!("{}", result.feedback_summary);
    }
    if !result.technical_details.is_empty() {
        println!();
        println!("Technical details:");
        for detail in &result.technical_details {
            println!("  {}: {}", detail.title, detail.description);
        }
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

async fn interactive_chat(coach: &Coach) -> Result<()> {
    println!("Chatting with the coach. Type 'exit' to leave.");
    let mut log = ChatLog::new();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        let Some(text) = log.begin_send(&line) else {
            continue;
        };
        log.finish(coach.chat(&text).await);
        if let Some(reply) = log.messages().last().filter(|m| m.role == Role::Assistant) {
            println!("coach> {}", reply.content);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    gymcoach_core::logging::init(cli.verbose);

    let config = load_config(&cli)?;

    // The layout preview needs no data directory.
    if let Commands::Stack {
        items,
        step,
        progress,
    } = &cli.command
    {
        let stack = match step {
            Some(step) => StackConfig::default().with_shrink_step(*step),
            None => config.stack,
        };
        stack.validate()?;
        let progress = if progress.is_empty() {
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        } else {
            progress.clone()
        };
        if stack.shrink_step != DEFAULT_SHRINK_STEP {
            println!("Shrink step: {}", stack.shrink_step);
        }
        print_stack_table(&StackLayout::new(*items, stack), &progress);
        return Ok(());
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let coach = Coach::new(&data_dir, config)?;

    match cli.command {
        Commands::Stack { .. } => {}

        Commands::Login { email, password } => {
            let user = coach.login(&email, &password).await.map_err(user_error)?;
            println!("Logged in as {}", user.email);
        }

        Commands::Logout => {
            coach.logout()?;
            println!("Logged out.");
        }

        Commands::Whoami => match coach.session().current() {
            Some(user) => println!("{}", user.email),
            None => println!("Not logged in."),
        },

        Commands::Analyze {
            trainer,
            user,
            exercise,
            json,
        } => {
            let trainer = MediaFile::open_as(&trainer, MediaKind::Video).map_err(user_error)?;
            let user = MediaFile::open_as(&user, MediaKind::Video).map_err(user_error)?;
            eprintln!(
                "Trainer: {} ({}), user: {} ({})",
                trainer.name,
                trainer.display_size(),
                user.name,
                user.display_size()
            );

            let result = coach
                .analyze(Some(trainer), Some(user), &exercise, Some(progress_printer()))
                .await
                .map_err(user_error)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_analysis(&result);
            }
        }

        Commands::Generate {
            image,
            exercise,
            error_description,
            out,
        } => {
            let image = MediaFile::open_as(&image, MediaKind::Image).map_err(user_error)?;
            let generated = coach
                .generate(Some(image), exercise.as_deref(), error_description.as_deref())
                .await
                .map_err(user_error)?;

            let out = out.unwrap_or_else(|| PathBuf::from(generated.file_name()));
            write_output(&out, &generated.bytes)?;
            println!("Saved corrected image to {}", out.display());
        }

        Commands::Chat { message } => match message {
            Some(message) => {
                let mut log = ChatLog::new();
                let Some(text) = log.begin_send(&message) else {
                    anyhow::bail!("Message is empty");
                };
                log.finish(coach.chat(&text).await);
                if let Some(reply) = log.messages().last() {
                    println!("{}", reply.content);
                }
            }
            None => interactive_chat(&coach).await?,
        },

        Commands::History { delete } => match delete {
            Some(id) => {
                if coach.delete_history_entry(&id)? {
                    println!("Deleted {}", id);
                } else {
                    anyhow::bail!("No analysis with ID {}", id);
                }
            }
            None => {
                let records = coach.history()?;
                if records.is_empty() {
                    println!("No past analyses.");
                }
                for record in records {
                    println!("{}  {}", record.id, record.exercise_name);
                    println!(
                        "  {}  frames: {}  mean score: {}",
                        record.created_at.format("%Y-%m-%d %H:%M"),
                        record.frame_count,
                        record.mean_score_label()
                    );
                    if let Some(frame) = record.worst_frame {
                        println!("  worst frame: #{}", frame);
                    }
                }
            }
        },
    }

    Ok(())
}
