use clap::Parser;
use reqwest::Client;
use rdp_client::auth::{Credentials, TokenManager};
use rdp_client::data::DataClient;
use rdp_client::error::ClientError;
use rdp_client::report::{render_esg, render_news_headlines, render_symbology};
use rdp_client::utils::config_loader;
use rdp_client::utils::constants::{DEFAULT_CONFIG_PATH, DEFAULT_NEWS_LIMIT, DEFAULT_SYMBOL};
use rdp_client::utils::logging;
use anyhow::Result;
use rdp_client::utils::logging::LogLevel;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
    /// RIC code to look up
    #[arg(short, long, default_value = DEFAULT_SYMBOL)]
    symbol: String,
    /// News headlines count
    #[arg(short = 'l', long = "newslimit", default_value_t = DEFAULT_NEWS_LIMIT)]
    news_limit: u32,
    /// Also request ESG scores
    #[arg(long)]
    esg: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config, init logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level.to_owned()).await?;
    info!("Running RDP example application");

    // -------------------------------
    // 2. Create request client and token manager
    // -------------------------------

    let client = Client::builder()
        .timeout(service_config.settings.http.timeout())
        .build()?;
    let manager = TokenManager::new(
        client.clone(),
        &service_config.endpoints,
        Credentials::from(&service_config.credentials),
    )
    .with_refresh_ratio(service_config.settings.refresh.ratio_percent);
    let data = DataClient::new(client, service_config.endpoints.clone());

    // -------------------------------
    // 3. Initial login, fatal on failure
    // -------------------------------

    if let Err(err) = manager.authenticate(None).await {
        error!("Error, exit the application: {}", err);
        return Err(err.into());
    }

    // -------------------------------
    // 4. Data requests, then wait for Ctrl+C
    // -------------------------------

    let outcome = tokio::select! {
        requested = run_requests(&manager, &data, &args) => match requested {
            Ok(()) => {
                info!("Press Ctrl+C to revoke the token and exit");
                wait_for_ctrl_c().await;
                Ok(())
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        },
        _ = wait_for_ctrl_c() => Ok(()),
    };

    // -------------------------------
    // 5. Revoke and exit
    // -------------------------------

    info!("Gracefully shutting down, calling RDP API Revoke service");
    let shutdown = &service_config.settings.shutdown;
    if let Err(err) = manager.shutdown(shutdown.revoke_timeout()).await {
        warn!("exiting without a confirmed revoke: {}", err);
    }
    tokio::time::sleep(shutdown.grace_delay()).await;

    outcome.map_err(Into::into)
}

async fn run_requests(manager: &TokenManager, data: &DataClient, args: &Args) -> Result<(), ClientError> {
    let access_token = manager.access_token().await;

    let symbology = data.symbology(&access_token, &args.symbol).await?;
    println!("{}", render_symbology(&symbology));

    let headlines = data.news_headlines(&access_token, &args.symbol, args.news_limit).await?;
    println!("{}", render_news_headlines(&headlines));

    if args.esg {
        let esg = data.esg_scores(&access_token, &args.symbol).await?;
        println!("{}", render_esg(&esg));
    }
    Ok(())
}

async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("unable to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
}
