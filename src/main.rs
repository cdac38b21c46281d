use std::collections::BTreeMap;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use discord_provider::{
    framework::{
        Context, Diagnostic, Diagnostics, ErrorKind, ImportStateRequest, ReadDataSourceRequest,
        ReadRequest, Snapshot, StringValue,
    },
    model::ServerDataSourceModel,
    provider::PROVIDER_TYPE_NAME,
    startup, DiscordProvider, ProviderHost,
};

#[derive(Parser)]
#[command(name = "discord-provider", version, about = "Inspect Discord through the provider")]
struct Cli {
    /// Bot token; falls back to DISCORD_AUTHENTICATION_TOKEN when omitted
    #[arg(long, global = true)]
    token: Option<String>,

    /// Abort remote calls that take longer than this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the provider, resource, and data source schemas as JSON
    Schema,
    /// Look up a server (guild) by ID
    Server {
        #[arg(long)]
        id: String,
    },
    /// Import a channel by ID and read its current state
    Channel {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("Error: {diagnostic}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Diagnostics> {
    let version = env!("CARGO_PKG_VERSION");
    let ctx = match cli.timeout_secs {
        Some(secs) => Context::with_timeout(Duration::from_secs(secs)),
        None => Context::background(),
    };

    match cli.command {
        Command::Schema => {
            let host = ProviderHost::new(DiscordProvider::new(version))?;
            print_json(&host.schemas())
        }
        Command::Server { id } => {
            let host = startup::configure_host(version, cli.token)?;
            let state = read_server(&host, &ctx, id).await?;
            print_json(&plain_attributes(&state)?)
        }
        Command::Channel { id } => {
            let host = startup::configure_host(version, cli.token)?;
            let state = import_channel(&host, &ctx, id).await?;
            print_json(&plain_attributes(&state)?)
        }
    }
}

async fn read_server(host: &ProviderHost, ctx: &Context, id: String) -> Result<Snapshot, Diagnostics> {
    let type_name = format!("{PROVIDER_TYPE_NAME}_server");
    let data_source = host
        .data_source(&type_name)
        .ok_or_else(|| unknown_type(&type_name))?;

    let config = Snapshot::from_model(&ServerDataSourceModel {
        id: StringValue::known(id),
        ..Default::default()
    })?;

    let response = data_source
        .read(ctx, ReadDataSourceRequest { config })
        .await;
    into_result(response.state, response.diagnostics)
}

async fn import_channel(
    host: &ProviderHost,
    ctx: &Context,
    id: String,
) -> Result<Snapshot, Diagnostics> {
    let type_name = format!("{PROVIDER_TYPE_NAME}_channel");
    let resource = host
        .resource(&type_name)
        .ok_or_else(|| unknown_type(&type_name))?;

    let imported = resource.import_state(ctx, ImportStateRequest { id }).await;
    let state = into_result(imported.state, imported.diagnostics)?;

    let response = resource.read(ctx, ReadRequest { state }).await;
    into_result(response.state, response.diagnostics)
}

fn into_result(state: Snapshot, diagnostics: Diagnostics) -> Result<Snapshot, Diagnostics> {
    if diagnostics.has_error() {
        return Err(diagnostics);
    }

    Ok(state)
}

fn unknown_type(type_name: &str) -> Diagnostics {
    Diagnostic::new(
        ErrorKind::Internal,
        "Unknown type",
        format!("The provider does not register \"{type_name}\"."),
    )
    .into()
}

/// Flattens a snapshot into attribute name to known value, `null` for unset attributes.
fn plain_attributes(state: &Snapshot) -> Result<BTreeMap<String, Option<String>>, Diagnostics> {
    let mut attributes = BTreeMap::new();

    if let Some(object) = state.as_value().as_object() {
        for name in object.keys() {
            let value = state.attribute(name).map_err(Diagnostics::from)?;
            attributes.insert(name.clone(), value.as_known().map(str::to_string));
        }
    }

    Ok(attributes)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Diagnostics> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        Diagnostics::from(Diagnostic::new(
            ErrorKind::Internal,
            "Unable to encode output",
            e.to_string(),
        ))
    })?;

    println!("{json}");

    Ok(())
}
