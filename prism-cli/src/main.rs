use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prism_core::{DisplayShell, FrameSurface, KINDS};
use prism_plugin_api::{Collaborators, Config};

#[derive(Parser)]
#[command(name = "prism", about = "Switchable display effects shell")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered effects for every kind
    List,
    /// Show an effect's default configuration
    Defaults {
        /// Effect kind (clock, light, sound, draw, display, camera, qr)
        kind: String,
        /// Effect id
        id: String,
    },
    /// Render one frame of an effect
    Show {
        /// Effect kind
        kind: String,
        /// Effect id (unknown ids fall back per kind)
        id: String,
        /// Config overrides as key=value, repeatable
        #[arg(long = "set", value_parser = parse_override)]
        set: Vec<(String, String)>,
        /// Frame width in columns
        #[arg(long, default_value_t = 80)]
        width: u16,
        /// Frame height in rows
        #[arg(long, default_value_t = 24)]
        height: u16,
    },
    /// Load an effect bundle and render it once
    Load {
        /// Effect kind to load the bundle into
        kind: String,
        /// Bundle directory (defaults inside the prism effects dir)
        dir: PathBuf,
    },
}

/// Parse a `key=value` override
fn parse_override(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn overrides_config(set: &[(String, String)]) -> Config {
    // Overrides arrive as strings; effects coerce them on read
    let mut config = Config::new();
    for (key, value) in set {
        config.set(key.clone(), value.clone());
    }
    config
}

fn print_frame(surface: &FrameSurface) {
    if let Some(class) = surface.class() {
        println!("[{class}]");
    }
    for node in surface.nodes() {
        println!("{node}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut shell = DisplayShell::new();

    match cli.command {
        Commands::List => {
            for host in shell.hosts() {
                let ids: Vec<&str> = host.ids().collect();
                println!(
                    "{:<8} fallback={:<8} {}",
                    host.kind(),
                    host.fallback_id(),
                    ids.join(", ")
                );
            }
            Ok(())
        }
        Commands::Defaults { kind, id } => {
            let Some(host) = shell.host(&kind) else {
                bail!("unknown kind '{kind}', expected one of: {}", KINDS.join(", "));
            };
            let Some(defaults) = host.defaults_for(&id) else {
                bail!("no effect '{id}' registered for kind '{kind}'");
            };
            let mut entries: Vec<_> = defaults.iter().collect();
            entries.sort_by_key(|(key, _)| *key);
            for (key, value) in entries {
                println!("{key} = {value}");
            }
            Ok(())
        }
        Commands::Show {
            kind,
            id,
            set,
            width,
            height,
        } => {
            let Some(host) = shell.host_mut(&kind) else {
                bail!("unknown kind '{kind}', expected one of: {}", KINDS.join(", "));
            };
            let mut surface = FrameSurface::new(width, height);
            host.switch(&id, &mut surface, &overrides_config(&set), &Collaborators::new())?;

            match host.current_id() {
                Some(active) => {
                    if active != id {
                        tracing::warn!(requested = %id, active = %active, "fell back");
                    }
                    print_frame(&surface);
                }
                None => bail!("no effect available for kind '{kind}'"),
            }
            Ok(())
        }
        Commands::Load { kind, dir } => {
            let Some(host) = shell.host_mut(&kind) else {
                bail!("unknown kind '{kind}', expected one of: {}", KINDS.join(", "));
            };
            let dir = if dir.is_absolute() {
                dir
            } else if dir.exists() {
                dir
            } else {
                prism_core::paths::effects_dir().join(&dir)
            };

            let bundle = host.load_bundle(&dir)?;
            println!("loaded '{}' into kind '{kind}'", bundle.id);

            let mut surface = FrameSurface::new(80, 24);
            host.switch(
                &bundle.id,
                &mut surface,
                &bundle.overrides,
                &Collaborators::new(),
            )?;
            print_frame(&surface);
            Ok(())
        }
    }
}
