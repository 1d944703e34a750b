use clap::{parser::ValueSource, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use triangle_http::config::{generate_hex_key, DEFAULT_BIND_ADDR};
use triangle_http::{serve, ServerConfig};

#[derive(Parser)]
#[command(name = "triangle", version, about = "Triangle test calculator server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, env = "TRIANGLE_BIND_ADDR")]
    bind_addr: Option<String>,
    #[arg(long, env = "TRIANGLE_PORT")]
    port: Option<u16>,

    /// Bind to 127.0.0.1:0 (OS-assigned ephemeral port). Prints resolved address at startup.
    #[arg(long)]
    auto_port: bool,

    /// Verbose logging; not allowed in production
    #[arg(long)]
    debug: bool,

    /// development or production (overrides TRIANGLE_ENV)
    #[arg(long = "env")]
    environment: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a freshly generated value for TRIANGLE_SECRET_KEY
    GenerateSecretKey,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Cli::command();
    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    match cli.command {
        Some(Command::GenerateSecretKey) => {
            println!("{}", generate_hex_key());
            Ok(())
        }
        None => {
            let config = match resolve_server_config(&cli, &matches) {
                Ok(config) => config,
                Err(msg) => {
                    eprintln!("ERROR: {}", msg);
                    std::process::exit(1);
                }
            };
            serve(config).await?;
            Ok(())
        }
    }
}

fn resolve_server_config(cli: &Cli, matches: &ArgMatches) -> Result<ServerConfig, String> {
    let mut config =
        ServerConfig::from_lookup(|key| cli_override(cli, key).or_else(|| std::env::var(key).ok()))
            .map_err(|e| e.to_string())?;

    config.bind_addr = resolve_bind_addr(cli, matches)?;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Flags shadow the matching `TRIANGLE_*` variables.
fn cli_override(cli: &Cli, key: &str) -> Option<String> {
    match key {
        "TRIANGLE_ENV" => cli.environment.clone(),
        "TRIANGLE_DEBUG" if cli.debug => Some("1".to_string()),
        _ => None,
    }
}

fn resolve_bind_addr(cli: &Cli, matches: &ArgMatches) -> Result<String, String> {
    if cli.auto_port && is_set_on_command_line(matches, "bind_addr") {
        return Err("--auto-port cannot be used with --bind-addr".to_string());
    }

    if cli.auto_port && is_set_on_command_line(matches, "port") {
        return Err("--auto-port cannot be used with --port".to_string());
    }

    if is_set_on_command_line(matches, "bind_addr") {
        return cli
            .bind_addr
            .clone()
            .ok_or_else(|| "--bind-addr requires a value".to_string());
    }

    if cli.auto_port {
        return Ok("127.0.0.1:0".to_string());
    }

    if is_set_on_command_line(matches, "port") {
        return cli
            .port
            .map(|port| format!("127.0.0.1:{port}"))
            .ok_or_else(|| "--port requires a value".to_string());
    }

    if let Some(bind_addr) = &cli.bind_addr {
        return Ok(bind_addr.clone());
    }

    if let Some(port) = cli.port {
        return Ok(format!("127.0.0.1:{port}"));
    }

    Ok(DEFAULT_BIND_ADDR.to_string())
}

fn is_set_on_command_line(matches: &ArgMatches, arg: &str) -> bool {
    matches.value_source(arg) == Some(ValueSource::CommandLine)
}
