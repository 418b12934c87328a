use std::path::Path;

use anyhow::{bail, Result};
use config_defs::{
    normalize_quantities, validate_build, Build, API_GROUP, API_VERSION, BUILD_KIND,
};
use config_utils::{
    openapi_to_json_schema, read_manifest_string, validate_manifest_schema, yaml_to_json,
};
use log::info;

use crate::crd::openapi_schema;

/// Parses a `Build` manifest, checking it against the CRD schema and the
/// structural constraints of the type.
pub fn validate_manifest(manifest_yaml: &str) -> Result<Build> {
    let mut manifest = yaml_to_json(manifest_yaml)?;

    let api_version = manifest["apiVersion"].as_str().unwrap_or_default();
    let kind = manifest["kind"].as_str().unwrap_or_default();
    let expected_api_version = format!("{}/{}", API_GROUP, API_VERSION);
    if api_version != expected_api_version || kind != BUILD_KIND {
        bail!(
            "Expected {} {}, found {} {}",
            expected_api_version,
            BUILD_KIND,
            api_version,
            kind
        );
    }

    if let Some(resources) = manifest.pointer_mut("/spec/buildDefaults/resources") {
        normalize_quantities(resources);
    }
    validate_manifest_schema(&manifest, &openapi_to_json_schema(&openapi_schema()?))?;

    let build: Build = serde_json::from_value(manifest)?;
    validate_build(&build)?;
    Ok(build)
}

pub async fn read_build_from_file(file_path: &Path) -> Result<Build> {
    let contents = read_manifest_string(file_path).await?;
    let build = validate_manifest(&contents)?;
    info!(
        "Read Build {} from {}",
        build.metadata.name.as_deref().unwrap_or("<unnamed>"),
        file_path.display()
    );
    Ok(build)
}
