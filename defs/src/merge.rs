use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{EnvVar, Toleration};
use log::debug;

use crate::build::{BuildDefaults, BuildOverrides, ImageLabel};
use crate::proxy::ProxySpec;

impl BuildDefaults {
    /// Proxy settings git operations run with: `gitProxy` with its unset fields
    /// inherited from `defaultProxy`.
    pub fn effective_git_proxy(&self) -> Option<ProxySpec> {
        match (&self.git_proxy, &self.default_proxy) {
            (Some(git), Some(default)) => Some(git.inherit_from(default)),
            (Some(git), None) => Some(git.clone()),
            (None, Some(default)) => Some(default.clone()),
            (None, None) => None,
        }
    }

    /// Appends every default variable the build does not already define.
    pub fn apply_env(&self, env: &mut Vec<EnvVar>) {
        for default in &self.env {
            if env.iter().any(|existing| existing.name == default.name) {
                debug!("Keeping build value for env var {}", default.name);
                continue;
            }
            env.push(default.clone());
        }
    }

    /// Appends every default label the build does not already set; the build's own label wins.
    pub fn apply_image_labels(&self, labels: &mut Vec<ImageLabel>) {
        merge_labels(labels, &self.image_labels, false);
    }
}

impl BuildOverrides {
    /// Applies override labels, replacing build labels of the same name in place.
    pub fn apply_image_labels(&self, labels: &mut Vec<ImageLabel>) {
        merge_labels(labels, &self.image_labels, true);
    }

    pub fn apply_node_selector(&self, node_selector: &mut BTreeMap<String, String>) {
        for (key, value) in &self.node_selector {
            node_selector.insert(key.clone(), value.clone());
        }
    }

    /// An empty override list leaves the build pod's tolerations untouched.
    pub fn apply_tolerations(&self, tolerations: &mut Vec<Toleration>) {
        if self.tolerations.is_empty() {
            return;
        }
        debug!(
            "Replacing {} build tolerations with {} overrides",
            tolerations.len(),
            self.tolerations.len()
        );
        *tolerations = self.tolerations.clone();
    }

    pub fn resolve_force_pull(&self, build_force_pull: bool) -> bool {
        self.force_pull.unwrap_or(build_force_pull)
    }
}

fn merge_labels(labels: &mut Vec<ImageLabel>, incoming: &[ImageLabel], overwrite: bool) {
    for label in incoming {
        match labels.iter_mut().find(|existing| existing.name == label.name) {
            Some(existing) if overwrite => existing.value = label.value.clone(),
            Some(_) => debug!("Keeping build value for image label {}", label.name),
            None => labels.push(label.clone()),
        }
    }
}
