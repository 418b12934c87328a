use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to a ConfigMap in the `openshift-config` namespace.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct ConfigMapNameReference {
    /// name is the metadata.name of the referenced config map
    pub name: String,
}

impl ConfigMapNameReference {
    pub fn new(name: &str) -> Self {
        ConfigMapNameReference {
            name: name.to_string(),
        }
    }

    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Proxy settings applied to network operations during a build.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxySpec {
    /// httpProxy is the URL of the proxy for HTTP requests.
    /// Empty means unset and will not result in an env var.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_proxy: String,

    /// httpsProxy is the URL of the proxy for HTTPS requests.
    /// Empty means unset and will not result in an env var.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub https_proxy: String,

    /// noProxy is a comma-separated list of hostnames and/or CIDRs and/or IPs
    /// for which the proxy should not be used.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub no_proxy: String,

    /// readinessEndpoints is a list of endpoints used to verify readiness of the proxy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub readiness_endpoints: Vec<String>,

    /// trustedCA is a reference to a ConfigMap containing a CA certificate bundle
    /// used to trust the proxy's certificates.
    #[serde(default, rename = "trustedCA")]
    pub trusted_ca: ConfigMapNameReference,
}

impl ProxySpec {
    /// Returns a copy of `self` where every unset field is taken from `fallback`.
    pub fn inherit_from(&self, fallback: &ProxySpec) -> ProxySpec {
        fn pick(own: &str, fallback: &str) -> String {
            if own.is_empty() {
                fallback.to_string()
            } else {
                own.to_string()
            }
        }

        ProxySpec {
            http_proxy: pick(&self.http_proxy, &fallback.http_proxy),
            https_proxy: pick(&self.https_proxy, &fallback.https_proxy),
            no_proxy: pick(&self.no_proxy, &fallback.no_proxy),
            readiness_endpoints: if self.readiness_endpoints.is_empty() {
                fallback.readiness_endpoints.clone()
            } else {
                self.readiness_endpoints.clone()
            },
            trusted_ca: if self.trusted_ca.is_set() {
                self.trusted_ca.clone()
            } else {
                fallback.trusted_ca.clone()
            },
        }
    }
}
