use clap::Parser;
use fragebogen::{state::Builder, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Set the Secure attribute on cookies. Pass `--secure-cookies=false`
    /// for plain-HTTP deployments.
    #[arg(long, env, default_value_t = true, action = clap::ArgAction::Set)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,fragebogen=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState {
        builder: Builder::new(),
        secure_cookies: args.secure_cookies,
    };
    let router = fragebogen::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("survey builder listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
