//! Resolution of compiled contract artifacts into deployable bytecode

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, BUILD_INFO_DIR, LINK_PLACEHOLDER_MARKER},
    errors::DeployError,
};

/// The creation bytecode of a named contract, ready to be deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFactory {
    /// The name of the contract
    pub name: String,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

/// A source of compiled contract artifacts
pub trait ArtifactSource {
    /// Resolve the named contract into a deployable factory
    fn contract_factory(&self, name: &str) -> Result<ContractFactory, DeployError>;
}

/// The subset of a Hardhat artifact needed for deployment
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    /// The name of the compiled contract
    contract_name: String,
    /// The hex-encoded creation bytecode
    bytecode: String,
    /// Libraries that must be linked into the bytecode
    #[serde(default)]
    link_references: Map<String, Value>,
}

/// Artifacts laid out by Hardhat, i.e. `<dir>/contracts/<File>.sol/<Name>.json`
#[derive(Debug, Clone)]
pub struct HardhatArtifacts {
    /// The root artifacts directory
    dir: PathBuf,
}

impl HardhatArtifacts {
    /// Read artifacts from the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Find every artifact file for the named contract below the artifacts directory
    fn find_artifacts(&self, name: &str) -> Result<Vec<PathBuf>, DeployError> {
        let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
        let mut found = Vec::new();
        collect_artifacts(&self.dir, &file_name, &mut found)?;
        Ok(found)
    }
}

impl ArtifactSource for HardhatArtifacts {
    fn contract_factory(&self, name: &str) -> Result<ContractFactory, DeployError> {
        let mut paths = self.find_artifacts(name)?;
        let path = match paths.len() {
            0 => {
                return Err(DeployError::configuration(format!(
                    "no artifact for {} under {}",
                    name,
                    self.dir.display()
                )))
            }
            1 => paths.remove(0),
            _ => {
                return Err(DeployError::configuration(format!(
                    "multiple artifacts for {}: {:?}",
                    name, paths
                )))
            }
        };

        debug!("Reading artifact {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|e| {
            DeployError::configuration(format!("failed to read {}", path.display())).with_source(e)
        })?;

        parse_artifact(name, &contents)
    }
}

/// Parse the contents of a Hardhat artifact into a factory for the named contract
pub fn parse_artifact(name: &str, contents: &str) -> Result<ContractFactory, DeployError> {
    let artifact: HardhatArtifact = serde_json::from_str(contents)
        .map_err(|e| DeployError::configuration("malformed artifact").with_source(e))?;

    if artifact.contract_name != name {
        return Err(DeployError::configuration(format!(
            "artifact is for {}, expected {}",
            artifact.contract_name, name
        )));
    }

    if !artifact.link_references.is_empty() || artifact.bytecode.contains(LINK_PLACEHOLDER_MARKER)
    {
        return Err(DeployError::configuration(format!(
            "{} has unlinked libraries: {:?}",
            name,
            artifact.link_references.keys().collect::<Vec<_>>()
        )));
    }

    let bytecode = Bytes::from_str(&artifact.bytecode)
        .map_err(|e| DeployError::configuration("invalid bytecode").with_source(e))?;
    if bytecode.is_empty() {
        return Err(DeployError::configuration(format!(
            "{} has no creation bytecode, is it abstract?",
            name
        )));
    }

    Ok(ContractFactory {
        name: artifact.contract_name,
        bytecode,
    })
}

/// Recursively collect the paths of files named `file_name` below `dir`,
/// skipping Hardhat's build info.
///
/// Symlinked directories are not descended into, so link cycles terminate
fn collect_artifacts(
    dir: &Path,
    file_name: &str,
    found: &mut Vec<PathBuf>,
) -> Result<(), DeployError> {
    let read_err = |e: io::Error| {
        DeployError::configuration(format!("failed to read {}", dir.display())).with_source(e)
    };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        let path = entry.path();

        if file_type.is_dir() {
            if entry.file_name() == BUILD_INFO_DIR {
                continue;
            }
            collect_artifacts(&path, file_name, found)?;
        } else if entry.file_name() == file_name {
            found.push(path);
        }
    }

    Ok(())
}
