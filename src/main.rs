use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inkboard::config::Config;
use inkboard::draw::Element;
use inkboard::input::{InputState, Scene};
use inkboard::replay;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Replay canvas tool interactions headlessly")]
struct Cli {
    /// Config file to use instead of ~/.config/inkboard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a host event script through the tool state machine and print the result
    Replay {
        /// Script file, one event per line
        script: PathBuf,

        /// Output format for the final scene
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the JSON schema of the config file
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Summary,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script, format } => {
            let config = load_config(cli.config.as_deref())?;
            let scene = run_script(&config, &script)?;
            match format {
                OutputFormat::Json => {
                    let json =
                        serde_json::to_string_pretty(&scene).context("Failed to serialize scene")?;
                    println!("{json}");
                }
                OutputFormat::Summary => print_summary(&scene),
            }
        }
        Command::Schema => println!("{}", Config::json_schema()?),
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_script(config: &Config, path: &Path) -> anyhow::Result<Scene> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    let mut state = InputState::from_config(config);
    let applied = replay::replay(&mut state, &script)
        .with_context(|| format!("Replay of {} failed", path.display()))?;
    log::info!("Applied {applied} event(s) from {}", path.display());

    if !state.is_idle() {
        log::warn!("Script ended mid-session ({})", state.phase());
    }
    Ok(state.scene())
}

fn print_summary(scene: &Scene) {
    println!(
        "tool={} shape={} phase={} elements={}",
        scene.tool,
        scene.shape,
        scene.phase,
        scene.elements.len()
    );
    for element in &scene.elements {
        println!("{}", describe(element));
    }
    if let Some(draft) = &scene.draft {
        println!("draft {}", describe(draft));
    }
}

fn describe(element: &Element) -> String {
    let bounds = element.bounding_box();
    format!(
        "{} {} z={} at ({:.1}, {:.1}) size {:.1}x{:.1} {}",
        element.id,
        element.kind(),
        element.z_index,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        element.style.color.name()
    )
}
