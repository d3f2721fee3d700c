//! Parsing of `docker ... --format '{{json .}}'` listings.
//!
//! Docker prints one JSON object per line for these commands.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::{Container, Image};
use cade_core::error::{CadeError, Result};

#[derive(Debug, Deserialize)]
struct DockerContainer {
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "Names", default)]
    names: String,
    #[serde(rename = "Image", default)]
    image: String,
    #[serde(rename = "Command", default)]
    command: String,
    #[serde(rename = "RunningFor", default)]
    running_for: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "Ports", default)]
    ports: String,
}

#[derive(Debug, Deserialize)]
struct DockerImage {
    #[serde(rename = "Repository", default)]
    repository: String,
    #[serde(rename = "Tag", default)]
    tag: String,
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "CreatedAt", default)]
    created_at: String,
    #[serde(rename = "Size", default)]
    size: String,
}

fn parse_lines<T: DeserializeOwned>(output: &[u8], what: &str) -> Result<Vec<T>> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| line.trim().trim_matches('\''))
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| {
                CadeError::Serialization(format!(
                    "Failed to parse {} entry '{}': {}",
                    what, line, e
                ))
            })
        })
        .collect()
}

/// Parses `docker container list --format '{{json .}}'` output.
pub fn parse_container_list(output: &[u8]) -> Result<Vec<Container>> {
    let parsed: Vec<DockerContainer> = parse_lines(output, "container list")?;
    Ok(parsed
        .into_iter()
        .map(|c| Container {
            id: c.id,
            // Containers with links report several comma-separated names.
            name: c
                .names
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            image: c.image,
            network: None,
            command: c.command,
            created: c.running_for,
            status: c.status,
            state: c.state,
            ports: c.ports,
        })
        .collect())
}

/// Parses `docker image list --format '{{json .}}'` output.
pub fn parse_image_list(output: &[u8]) -> Result<Vec<Image>> {
    let parsed: Vec<DockerImage> = parse_lines(output, "image list")?;
    Ok(parsed
        .into_iter()
        .map(|i| Image {
            repository: i.repository,
            tag: i.tag,
            id: i.id,
            created: i.created_at,
            size: i.size,
        })
        .collect())
}
