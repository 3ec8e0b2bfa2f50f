//! ttykeys CLI - inspect decoded keypresses and the ANSI palette.
//!
//! This is the binary entry point. See the `ttykeys` library for the
//! decoder itself.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use ttykeys::terminal::ansi;
use ttykeys::{Color, Config, KeyEvent, Keyboard, Segment};

/// Prints every key until the configured quit key is pressed.
fn run_keys(config: &Config) -> Result<()> {
    let mut keyboard = Keyboard::stdin(config);

    let mut stdout = io::stdout();
    ansi::set_title(&mut stdout, "ttykeys")?;
    writeln!(
        stdout,
        "Press keys to see their codes; '{}' quits.",
        config.quit_key
    )?;
    stdout.flush()?;

    log::info!(
        "Key viewer started (sample delay {}us)",
        config.sample_delay_us
    );

    loop {
        let event = keyboard.read_key().context("Failed to read key")?;
        log::info!("key {event} (code {})", event.code());

        writeln!(stdout, "{:<12} code {:>4}", event.to_string(), event.code())?;
        stdout.flush()?;

        if let KeyEvent::Char(byte) = event {
            if char::from(byte) == config.quit_key {
                break;
            }
        }
    }

    log::info!("Key viewer stopped");
    Ok(())
}

/// Prints the foreground palette and the eight background colors.
fn run_colors() -> Result<()> {
    // Colors are reset even if a write fails halfway.
    let mut out = scopeguard::guard(io::stdout().lock(), |mut out| {
        let _ = ansi::reset_color(&mut out);
        let _ = out.write_all(b"\n");
        let _ = out.flush();
    });

    for color in Color::PALETTE {
        let label = format!("{:<14}", color.name());
        ansi::write_segments(&mut *out, &[Segment::Fg(color), Segment::Text(&label)])?;
        if color.bg_sequence().is_some() {
            let sample = format!(" {:<12}", color.name());
            ansi::write_segments(
                &mut *out,
                &[
                    Segment::Colors(Color::White, color),
                    Segment::Text(&sample),
                ],
            )?;
        }
        ansi::reset_color(&mut *out)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn run_size() -> Result<()> {
    let size = ansi::terminal_size().context("Failed to query terminal size")?;
    println!("{} columns x {} rows", size.x, size.y);
    Ok(())
}

fn run_config(config: &Config, init: bool) -> Result<()> {
    if init {
        let path = config.save()?;
        println!("Wrote {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}

// CLI
#[derive(Parser)]
#[command(name = "ttykeys")]
#[command(version)]
#[command(about = "Decode raw terminal keypresses into logical keys")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show decoded keys and their legacy codes until the quit key
    Keys,
    /// Print the color palette
    Colors,
    /// Print the terminal size
    Size,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(config: &Config) -> Result<()> {
    // Log to a file so log output does not interleave with the key viewer.
    let log_path = config.log_path();
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file at {}", log_path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format_timestamp_secs()
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Overrides are applied before logging starts (they may name the log
    // file), so rejected ones are reported afterwards.
    let mut config = Config::load_from(&Config::config_path()?)?;
    let ignored = config.apply_env_overrides();
    init_logging(&config)?;
    for message in &ignored {
        log::warn!("{message}");
    }

    // Log panics and leave the cursor visible; raw mode is restored by the
    // guard's Drop while unwinding.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        log::error!("PANIC: {:?}", panic_info);
        let mut stdout = io::stdout();
        let _ = ansi::reset_color(&mut stdout);
        let _ = ansi::set_cursor_visible(&mut stdout, true);
        let _ = stdout.flush();
        default_hook(panic_info);
    }));

    match cli.command {
        Commands::Keys => run_keys(&config)?,
        Commands::Colors => run_colors()?,
        Commands::Size => run_size()?,
        Commands::Config { init } => run_config(&config, init)?,
    }

    Ok(())
}
