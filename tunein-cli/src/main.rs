use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tunein_api::auth::Session;
use tunein_api::{ClientConfig, TuneinClient};

mod walk;

#[derive(Parser)]
#[command(
    name = "tunein",
    version,
    about = "List TuneIn favorites and resolve their stream URLs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Bearer token (overrides the saved session)
    #[arg(long, global = true, env = "TUNEIN_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Verify TLS certificates
    #[arg(long, global = true)]
    strict_tls: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print title, type, and stream URL of every favorite
    Favorites {
        /// Listen context sent with the request (prompted for when omitted)
        keyword: Option<String>,
    },
    /// Resolve a guide id to a stream URL
    Stream {
        /// Guide id (e.g. s24939)
        guide_id: String,
    },
    /// Show the newest episode of a podcast
    Episode {
        /// Podcast guide id (e.g. p17)
        guide_id: String,
    },
    /// Save the bearer token
    Login {
        /// Token value, with or without the `Bearer ` prefix
        #[arg(value_name = "TOKEN", required_unless_present = "check")]
        value: Option<String>,
        /// Check whether a token is configured
        #[arg(long)]
        check: bool,
    },
    /// Clear saved session
    Logout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Favorites { keyword } => cmd_favorites(keyword, cli.token, cli.strict_tls),
        Command::Stream { guide_id } => cmd_stream(&guide_id, cli.token, cli.strict_tls),
        Command::Episode { guide_id } => cmd_episode(&guide_id, cli.token, cli.strict_tls),
        Command::Login { value, check } => cmd_login(value, check, cli.token.as_deref()),
        Command::Logout => cmd_logout(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn client(token: Option<String>, strict_tls: bool) -> Result<TuneinClient> {
    let session = match token {
        Some(t) => Session::with_token(t),
        None => Session::load().context("failed to load session")?,
    };
    let config = ClientConfig {
        accept_invalid_certs: !strict_tls,
        ..ClientConfig::default()
    };
    Ok(TuneinClient::with_config(session, config)?)
}

// ── favorites ──

fn cmd_favorites(keyword: Option<String>, token: Option<String>, strict_tls: bool) -> Result<()> {
    let client = client(token, strict_tls)?;
    let keyword = match keyword {
        Some(k) => k,
        None => prompt("what do you want to search for? ")?,
    };
    let entries = client
        .favorites(&keyword)
        .context("failed to fetch favorites")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    walk::print_favorites(&client, &entries, &mut out)?;
    out.flush()?;
    Ok(())
}

fn prompt(question: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{question}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read keyword")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

// ── stream / episode ──

fn cmd_stream(guide_id: &str, token: Option<String>, strict_tls: bool) -> Result<()> {
    let client = client(token, strict_tls)?;
    if let Some(url) = client.resolve_stream(guide_id)? {
        println!("{url}");
    }
    Ok(())
}

fn cmd_episode(guide_id: &str, token: Option<String>, strict_tls: bool) -> Result<()> {
    let client = client(token, strict_tls)?;
    match client.latest_episode(guide_id)? {
        Some(episode) => println!("{episode}"),
        None => println!("No episodes found."),
    }
    Ok(())
}

// ── login / logout ──

fn cmd_login(token: Option<String>, check: bool, override_token: Option<&str>) -> Result<()> {
    if check {
        let saved = Session::load()?;
        println!("{}", login_status(override_token, &saved, &Session::path()?));
        return Ok(());
    }

    let token = token.context("token value required")?;
    Session::with_token(token).save()?;
    println!("Session saved.");
    Ok(())
}

/// Describe which token `favorites` would use, mirroring the precedence in [`client`].
fn login_status(override_token: Option<&str>, saved: &Session, path: &Path) -> String {
    if let Some(token) = override_token {
        return if Session::with_token(token).is_logged_in() {
            "Token configured (--token / TUNEIN_TOKEN).".to_owned()
        } else {
            "Not logged in (--token / TUNEIN_TOKEN is empty).".to_owned()
        };
    }
    if saved.is_logged_in() {
        format!("Token configured ({}).", path.display())
    } else {
        "Not logged in.".to_owned()
    }
}

fn cmd_logout() -> Result<()> {
    Session::clear()?;
    println!("Session cleared.");
    Ok(())
}
