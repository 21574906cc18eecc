//! Reddit Gallery - CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_gallery::{
    aggregate::{run_aggregation, AutoStall},
    api::{ClientSettings, Credentials, RedditClient},
    cli::Args,
    config::{config_warnings, parse_source, validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_error, print_info, print_media_results, print_non_media_results,
        print_query_summary, print_run_summary, print_warning, ConsoleStallHandler,
        ConsoleStatusSink,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_) | Error::Fetch(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        if !args.quiet {
            print_warning(&format!(
                "Configuration file not found: {}",
                config_path.display()
            ));
            print_info("Using default configuration with CLI arguments");
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Normalize and validate
    config.query.source = parse_source(&config.query.source);
    validate_config(&config)?;

    let quiet = config.options.quiet;

    if !quiet {
        print_banner();
        for warning in config_warnings(&config) {
            print_warning(&warning);
        }
        print_query_summary(&config.query);
    }

    // Initialize API client
    let settings = ClientSettings {
        user_agent: config.credentials.user_agent.clone(),
        request_timeout: Duration::from_secs(config.options.request_timeout_seconds),
        ..Default::default()
    };
    let client = RedditClient::new(settings)?;

    let credentials = Credentials {
        client_id: config.credentials.client_id.clone(),
        client_secret: config.credentials.client_secret.clone(),
    };

    // Run the aggregation
    let sink = if quiet {
        ConsoleStatusSink::quiet()
    } else {
        ConsoleStatusSink::new()
    };

    let aggregation = if config.options.non_interactive {
        run_aggregation(
            &client,
            &credentials,
            &config.query,
            &sink,
            &AutoStall(false),
        )
        .await
    } else {
        let stall = ConsoleStallHandler::new(&sink);
        run_aggregation(&client, &credentials, &config.query, &sink, &stall).await
    };

    sink.finish();

    // Report results
    print_media_results(&aggregation.media, config.query.limit);
    if config.options.show_non_media {
        print_non_media_results(&aggregation.non_media);
    }
    if !quiet {
        print_run_summary(&aggregation, config.query.limit);
    }

    if aggregation.termination.is_error() {
        Ok(ExitCode::from(exit_codes::API_ERROR as u8))
    } else {
        Ok(ExitCode::from(exit_codes::SUCCESS as u8))
    }
}
