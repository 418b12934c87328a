use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use config_defs::{Build, BUILD_KIND};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceSubresourceStatus, CustomResourceSubresources,
};
use kube::CustomResourceExt;

pub const API_APPROVED_ANNOTATION: &str = "api-approved.openshift.io";
pub const API_APPROVAL_URL: &str = "https://github.com/openshift/api/pull/470";
pub const CAPABILITY_ANNOTATION: &str = "capability.openshift.io/name";
pub const BUILD_CAPABILITY: &str = "Build";

/// The `builds.config.openshift.io` CRD, with the status subresource and
/// approval annotations the API server expects for `*.openshift.io` groups.
pub fn build_crd() -> CustomResourceDefinition {
    let mut crd = Build::crd();

    let names = &mut crd.spec.names;
    names
        .list_kind
        .get_or_insert_with(|| format!("{}List", BUILD_KIND));
    names
        .singular
        .get_or_insert_with(|| BUILD_KIND.to_lowercase());

    crd.metadata
        .annotations
        .get_or_insert_with(BTreeMap::new)
        .extend([
            (
                API_APPROVED_ANNOTATION.to_string(),
                API_APPROVAL_URL.to_string(),
            ),
            (
                CAPABILITY_ANNOTATION.to_string(),
                BUILD_CAPABILITY.to_string(),
            ),
        ]);

    for version in crd.spec.versions.iter_mut() {
        version.subresources = Some(CustomResourceSubresources {
            status: Some(CustomResourceSubresourceStatus(serde_json::json!({}))),
            ..Default::default()
        });
    }

    crd
}

pub fn render_crd() -> Result<String> {
    Ok(serde_yaml::to_string(&build_crd())?)
}

/// The `openAPIV3Schema` of the stored version as plain JSON.
pub fn openapi_schema() -> Result<serde_json::Value> {
    let crd = build_crd();
    let schema = crd
        .spec
        .versions
        .iter()
        .find(|version| version.storage)
        .and_then(|version| version.schema.as_ref())
        .and_then(|validation| validation.open_api_v3_schema.as_ref())
        .ok_or_else(|| anyhow!("CRD {:?} has no openAPIV3Schema", crd.metadata.name))?;
    Ok(serde_json::to_value(schema)?)
}
