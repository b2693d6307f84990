//! Command dispatch: CLI arguments to API calls to rendered output

use log::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::defaults;
use crate::error::{Result, VtmError};
use crate::output::{format_names, format_raw, format_rows};
use crate::ui::{can_prompt, create_spinner, finish_spinner, prompt_name, prompt_resource};
use crate::vtm::{ResourceType, Settings, VtmClient};

/// What a single invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Categories advertised by the appliance
    Catalog,
    /// Every instance of a category
    All(ResourceType),
    /// Raw configuration of one instance
    Instance(ResourceType, String),
}

impl Target {
    /// Build a target from a resource key and instance name
    pub fn parse(resource: &str, name: &str) -> Result<Self> {
        let resource: ResourceType = resource.trim().parse()?;
        if name.trim().is_empty() {
            return Err(VtmError::Config("instance name must not be empty".to_string()));
        }
        if name == defaults::ALL {
            Ok(Target::All(resource))
        } else {
            Ok(Target::Instance(resource, name.to_string()))
        }
    }

    fn describe(&self) -> String {
        match self {
            Target::Catalog => "resource catalog".to_string(),
            Target::All(r) => r.key().to_string(),
            Target::Instance(r, name) => format!("{} '{}'", r.singular(), name),
        }
    }
}

/// Work out the target from flags, prompting for anything missing
pub fn resolve_target(cli: &Cli) -> Result<Target> {
    if cli.list_api {
        return Ok(Target::Catalog);
    }

    let interactive = can_prompt(cli.batch);

    let resource = match &cli.resource {
        Some(r) => r.clone(),
        None if interactive => prompt_resource()?,
        None => {
            return Err(VtmError::Config(format!(
                "--resource is required (one of: {})",
                ResourceType::keys().join(",")
            )))
        }
    };

    // Reject unknown types before asking for anything else
    resource.trim().parse::<ResourceType>()?;

    let name = match &cli.name {
        Some(n) => n.clone(),
        None if interactive => prompt_name()?,
        None => {
            return Err(VtmError::Config(
                "--name is required ('all' or an instance name)".to_string(),
            ))
        }
    };

    Target::parse(&resource, &name)
}

/// Fetch and render a target
pub async fn render_target(
    client: &VtmClient,
    target: &Target,
    format: &OutputFormat,
    no_header: bool,
) -> Result<String> {
    match target {
        Target::Catalog => {
            let names = client.list_api_resources().await?;
            format_names("resources", &names, format, no_header)
        }
        Target::All(ResourceType::Pools) => {
            let rows = client.get_pool_rows().await?;
            format_rows(&rows, format, no_header)
        }
        Target::All(ResourceType::VirtualServers) => {
            let rows = client.get_virtual_server_rows().await?;
            format_rows(&rows, format, no_header)
        }
        Target::All(ResourceType::TrafficIpGroups) => {
            let rows = client.get_traffic_ip_group_rows().await?;
            format_rows(&rows, format, no_header)
        }
        Target::All(resource) => {
            let names = client.list_resource_names(*resource).await?;
            format_names(&format!("{}:name", resource.key()), &names, format, no_header)
        }
        Target::Instance(resource, name) => {
            let raw = client.get_resource_detail(*resource, name).await?;
            format_raw(&raw, format)
        }
    }
}

/// Run one invocation end to end
pub async fn run_command(cli: &Cli) -> Result<()> {
    let target = resolve_target(cli)?;
    debug!("Target: {:?}", target);

    let settings = Settings::resolve(
        cli.url.as_deref(),
        cli.user.as_deref(),
        cli.password.as_deref(),
        cli.insecure,
    )?;

    let mut client = VtmClient::new(&settings)?;
    client.set_concurrency(cli.concurrency);

    let spinner = create_spinner(&format!("Fetching {}...", target.describe()), cli.batch);
    let result = render_target(&client, &target, &cli.output, cli.no_header).await;
    finish_spinner(spinner);

    let rendered = result?;
    println!("{}", rendered);

    info!("Completed successfully");
    Ok(())
}
