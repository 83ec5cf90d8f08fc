use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::creational::builder::HouseStyle;
use design_patterns::structural::decorator::Layer;
use design_patterns::{demo, logging, DemoConfig};

#[derive(Parser, Debug)]
#[command(name = "patterns", about = "Builder, Factory and Decorator pattern demos", version)]
struct Cli {
    /// TOML file overriding the demo defaults
    #[arg(long, env = "PATTERNS_CONFIG", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long, value_name = "FILTER", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Unique and shared directors driving house builders
    Builder {
        /// Builder style for the unique director (wooden, fancy)
        #[arg(long, value_name = "STYLE")]
        unique_style: Option<HouseStyle>,

        /// Builder style the shared directors hold (wooden, fancy)
        #[arg(long, value_name = "STYLE")]
        shared_style: Option<HouseStyle>,
    },
    /// Transport factory over the configured requests
    Factory,
    /// Notifier decorators stacked on a base notifier
    Decorator {
        /// Comma separated layers, innermost first (sms, facebook, slack)
        #[arg(long, value_name = "LAYERS", value_delimiter = ',')]
        layers: Option<Vec<Layer>>,
    },
    /// Deliver with a single transport, prompting on stdin if none is given
    Deliver { kind: Option<String> },
    /// Builder, factory and decorator demos in sequence
    All,
}

impl Command {
    /// Folds command line overrides into the loaded configuration.
    fn apply_overrides(&self, config: &mut DemoConfig) {
        match self {
            Command::Builder {
                unique_style,
                shared_style,
            } => {
                if let Some(style) = unique_style {
                    config.builder.unique_style = *style;
                }
                if let Some(style) = shared_style {
                    config.builder.shared_style = *style;
                }
            }
            Command::Decorator {
                layers: Some(layers),
            } => config.decorator.layers = layers.clone(),
            _ => {}
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config =
        DemoConfig::load(cli.config.as_deref()).context("loading demo configuration")?;
    cli.command.apply_overrides(&mut config);
    logging::init(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Builder { .. } => {
            demo::run_builder(&config.builder, &mut out).context("builder demo")?
        }
        Command::Factory => demo::run_factory(&config.factory, &mut out).context("factory demo")?,
        Command::Decorator { .. } => {
            demo::run_decorator(&config.decorator, &mut out).context("decorator demo")?
        }
        Command::All => demo::run_all(&config, &mut out).context("all demos")?,
        Command::Deliver { kind } => {
            let kind = match kind {
                Some(kind) => kind,
                None => demo::read_transport_kind(&mut io::stdin().lock(), &mut out)
                    .context("reading transport type")?,
            };
            let status = demo::deliver(&kind, &mut out).context("deliver")?;
            return Ok(ExitCode::from(status.exit_code()));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deliver_with_kind() {
        let cli = Cli::try_parse_from(["patterns", "deliver", "ship"]).unwrap();
        assert!(matches!(cli.command, Command::Deliver { kind: Some(ref k) } if k == "ship"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["patterns", "builder", "--log-level", "debug", "--config", "p.toml"])
                .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("p.toml")));
        assert!(matches!(cli.command, Command::Builder { .. }));
    }

    #[test]
    fn test_builder_style_overrides() {
        let cli = Cli::try_parse_from(["patterns", "builder", "--unique-style", "wooden"]).unwrap();
        let mut config = DemoConfig::default();
        cli.command.apply_overrides(&mut config);
        assert_eq!(config.builder.unique_style, HouseStyle::Wooden);
        assert_eq!(config.builder.shared_style, HouseStyle::Wooden);

        let cli = Cli::try_parse_from(["patterns", "builder", "--shared-style", "fancy"]).unwrap();
        cli.command.apply_overrides(&mut config);
        assert_eq!(config.builder.shared_style, HouseStyle::Fancy);
    }

    #[test]
    fn test_unknown_style_rejected_with_message() {
        let err = Cli::try_parse_from(["patterns", "builder", "--unique-style", "brick"]).unwrap_err();
        assert!(err.to_string().contains("unknown house style 'brick'"));
    }

    #[test]
    fn test_decorator_layer_overrides() {
        let cli = Cli::try_parse_from(["patterns", "decorator", "--layers", "slack,sms"]).unwrap();
        let mut config = DemoConfig::default();
        cli.command.apply_overrides(&mut config);
        assert_eq!(config.decorator.layers, vec![Layer::Slack, Layer::Sms]);

        let err = Cli::try_parse_from(["patterns", "decorator", "--layers", "sms,email"]).unwrap_err();
        assert!(err.to_string().contains("unknown notifier layer 'email'"));
    }

    #[test]
    fn test_decorator_without_layers_keeps_config() {
        let cli = Cli::try_parse_from(["patterns", "decorator"]).unwrap();
        let mut config = DemoConfig::default();
        cli.command.apply_overrides(&mut config);
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["patterns"]).is_err());
    }
}
