use std::io::Write;

use anyhow::{bail, Result};
use clap::{ArgEnum, Args};
use resources::objects::ServiceBindings;
use strum::Display;

use crate::{client::SmClient, Context};

#[derive(Args)]
pub struct Arg {
    /// Name of the binding
    name: Option<String>,
    /// Output format
    #[clap(short, long, arg_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ArgEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// No binding carries the requested name.
    NotFound,
    /// Every binding has its instance name filled in.
    Found(ServiceBindings),
}

impl Arg {
    pub fn handle(&self, ctx: &mut Context) -> Result<()> {
        let name = self.name.as_deref().unwrap_or_default();
        let resolution = resolve(ctx.client, name)?;
        present(&resolution, name, self.output, &mut *ctx.output)
    }
}

/// Find the bindings called `name` and fill in the name of their instances.
///
/// Each match is fetched again by ID, then its instance is fetched,
/// one call at a time in list order. Any failed call aborts the lookup.
pub fn resolve(client: &dyn SmClient, name: &str) -> Result<Resolution> {
    if name.is_empty() {
        bail!("Single [name] is required");
    }

    let candidates = client.list_bindings(Some(name))?;
    if candidates.is_empty() {
        tracing::info!("No binding named {}", name);
        return Ok(Resolution::NotFound);
    }

    let vertical = candidates.len() > 1;
    let mut resolved = Vec::with_capacity(candidates.len());
    for candidate in candidates.service_bindings {
        let mut binding = client.get_binding_by_id(candidate.id.as_str())?;
        let instance = client.get_instance_by_id(binding.service_instance_id.as_str())?;
        if !binding.resolve_instance(&instance) {
            bail!(
                "Binding {} references service instance {} but {} was returned",
                binding.id,
                binding.service_instance_id,
                instance.id
            );
        }
        tracing::debug!(
            "Binding {} belongs to service instance {}",
            binding.id,
            instance.name
        );
        resolved.push(binding);
    }
    tracing::info!("Found {} binding(s) named {}", resolved.len(), name);

    Ok(Resolution::Found(ServiceBindings::new(resolved, vertical)))
}

pub fn present<W: Write + ?Sized>(
    resolution: &Resolution,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let bindings = match resolution {
        Resolution::NotFound => {
            writeln!(out, "No binding found with name: {}", name)?;
            return Ok(());
        },
        Resolution::Found(bindings) => bindings,
    };

    match format {
        OutputFormat::Table => writeln!(out, "{}", bindings.table_data())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(bindings)?)?,
        OutputFormat::Yaml => writeln!(out, "{}", serde_yaml::to_string(bindings)?.trim_end())?,
    }
    Ok(())
}
