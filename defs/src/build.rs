use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{EnvVar, ResourceRequirements, Toleration};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::{CustomResource, Resource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::proxy::{ConfigMapNameReference, ProxySpec};
use crate::quantity::deserialize_resources;

pub const API_GROUP: &str = "config.openshift.io";
pub const API_VERSION: &str = "v1";
pub const BUILD_KIND: &str = "Build";
pub const BUILD_PLURAL: &str = "builds";

/// The only instance name the build controller reads.
pub const CLUSTER_BUILD_NAME: &str = "cluster";

/// Build configures the behavior of OpenShift builds for the entire cluster.
/// This includes default settings that can be overridden in BuildConfig objects,
/// and overrides which are applied to all builds.
///
/// The canonical name is "cluster".
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "Build",
    plural = "builds",
    singular = "build",
    derive = "PartialEq",
    derive = "Default"
)]
pub struct BuildSpec {
    /// additionalTrustedCA is a reference to a ConfigMap containing additional CAs that
    /// should be trusted for image pushes and pulls during builds.
    /// The namespace for this config map is openshift-config.
    ///
    /// DEPRECATED: Additional CAs for image pull and push should be set on
    /// image.config.openshift.io/cluster instead.
    #[serde(default, rename = "additionalTrustedCA")]
    pub additional_trusted_ca: ConfigMapNameReference,

    /// buildDefaults controls the default information for Builds
    #[serde(default, rename = "buildDefaults")]
    pub build_defaults: BuildDefaults,

    /// buildOverrides controls override settings for builds
    #[serde(default, rename = "buildOverrides")]
    pub build_overrides: BuildOverrides,
}

impl Build {
    /// Creates the canonical `cluster` instance.
    pub fn cluster(spec: BuildSpec) -> Self {
        Build::new(CLUSTER_BUILD_NAME, spec)
    }

    pub fn is_canonical(&self) -> bool {
        self.metadata.name.as_deref() == Some(CLUSTER_BUILD_NAME)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefaults {
    /// defaultProxy contains the default proxy settings for all build operations,
    /// including image pull/push and source download.
    ///
    /// Values can be overrode by setting the `HTTP_PROXY`, `HTTPS_PROXY`, and `NO_PROXY`
    /// environment variables in the build config's strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_proxy: Option<ProxySpec>,

    /// gitProxy contains the proxy settings for git operations only. If set, this will
    /// override any Proxy settings for all git commands, such as git clone.
    ///
    /// Values that are not set here will be inherited from DefaultProxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_proxy: Option<ProxySpec>,

    /// env is a set of default environment variables that will be applied to the
    /// build if the specified variables do not exist on the build
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,

    /// imageLabels is a list of docker labels that are applied to the resulting image.
    /// User can override a default label by providing a label with the same name in their
    /// Build/BuildConfig.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_labels: Vec<ImageLabel>,

    /// resources defines resource requirements to execute the build.
    #[serde(default, deserialize_with = "deserialize_resources")]
    #[schemars(with = "ResourceRequirements")]
    pub resources: ResourceRequirements,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct ImageLabel {
    /// name defines the name of the label. It must have non-zero length.
    pub name: String,

    /// value defines the literal value of the label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl ImageLabel {
    pub fn new(name: &str, value: &str) -> Self {
        ImageLabel {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildOverrides {
    /// imageLabels is a list of docker labels that are applied to the resulting image.
    /// If user provided a label in their Build/BuildConfig with the same name as one in this
    /// list, the user's label will be overwritten.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_labels: Vec<ImageLabel>,

    /// nodeSelector is a selector which must be true for the build pod to fit on a node
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,

    /// tolerations is a list of Tolerations that will override any existing
    /// tolerations set on a build pod.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tolerations: Vec<Toleration>,

    /// forcePull overrides, if set, the equivalent value in the builds,
    /// i.e. false disables force pull for all builds,
    /// true enables force pull for all builds,
    /// independently of what each build specifies itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_pull: Option<bool>,
}

/// Collection envelope returned when listing `builds.config.openshift.io`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildList {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// metadata is the standard list's metadata.
    #[serde(default)]
    pub metadata: ListMeta,

    /// items are the Build objects of the list, in the order the server returned them.
    #[serde(default)]
    pub items: Vec<Build>,
}

impl BuildList {
    pub fn new(items: Vec<Build>) -> Self {
        BuildList {
            api_version: Build::api_version(&()).to_string(),
            kind: format!("{}List", Build::kind(&())),
            metadata: ListMeta::default(),
            items,
        }
    }

    /// The canonical `cluster` instance, if the list holds it.
    pub fn cluster(&self) -> Option<&Build> {
        self.items.iter().find(|build| build.is_canonical())
    }
}

impl Default for BuildList {
    fn default() -> Self {
        BuildList::new(vec![])
    }
}
