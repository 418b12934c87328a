use log::{debug, warn};

use crate::build::{Build, ImageLabel, CLUSTER_BUILD_NAME};
use crate::errors::ValidationError;

pub fn validate_image_label(label: &ImageLabel, path: &str) -> Result<(), ValidationError> {
    if label.name.is_empty() {
        return Err(ValidationError::EmptyImageLabelName(format!("{}.name", path)));
    }
    Ok(())
}

/// Checks the constraints the API server and build controller expect of a
/// `Build`, reporting every violation at once.
pub fn validate_build(build: &Build) -> Result<(), ValidationError> {
    let mut errors = vec![];

    let name = build.metadata.name.clone().unwrap_or_default();
    if name != CLUSTER_BUILD_NAME {
        errors.push(ValidationError::NonCanonicalName {
            expected: CLUSTER_BUILD_NAME.to_string(),
            found: name.clone(),
        });
    }

    if build.spec.additional_trusted_ca.is_set() {
        warn!(
            "Build {} sets the deprecated additionalTrustedCA, configure image.config.openshift.io/cluster instead",
            name
        );
    }

    let label_lists = [
        (
            "spec.buildDefaults.imageLabels",
            &build.spec.build_defaults.image_labels,
        ),
        (
            "spec.buildOverrides.imageLabels",
            &build.spec.build_overrides.image_labels,
        ),
    ];
    for (prefix, labels) in label_lists {
        for (i, label) in labels.iter().enumerate() {
            if let Err(e) = validate_image_label(label, &format!("{}[{}]", prefix, i)) {
                errors.push(e);
            }
        }
    }

    if errors.is_empty() {
        debug!("Build {} is valid", name);
        Ok(())
    } else {
        Err(ValidationError::Invalid(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildDefaults, BuildOverrides, BuildSpec};
    use crate::proxy::ConfigMapNameReference;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_cluster_build_is_valid() {
        assert_eq!(validate_build(&Build::cluster(BuildSpec::default())), Ok(()));
    }

    #[test]
    fn test_deprecated_trusted_ca_is_still_valid() {
        let build = Build::cluster(BuildSpec {
            additional_trusted_ca: ConfigMapNameReference::new("registry-cas"),
            ..Default::default()
        });
        assert!(validate_build(&build).is_ok());
    }

    #[test]
    fn test_empty_label_name_is_rejected() {
        let label = ImageLabel::new("", "value");
        assert_eq!(
            validate_image_label(&label, "labels[0]"),
            Err(ValidationError::EmptyImageLabelName("labels[0].name".to_string()))
        );
        assert!(validate_image_label(&ImageLabel::new("name", ""), "labels[0]").is_ok());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let build = Build::new(
            "builds",
            BuildSpec {
                build_defaults: BuildDefaults {
                    image_labels: vec![ImageLabel::new("ok", "1"), ImageLabel::new("", "2")],
                    ..Default::default()
                },
                build_overrides: BuildOverrides {
                    image_labels: vec![ImageLabel::new("", "3")],
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        let err = validate_build(&build).unwrap_err();
        assert_eq!(
            err.errors(),
            vec![
                &ValidationError::NonCanonicalName {
                    expected: "cluster".to_string(),
                    found: "builds".to_string()
                },
                &ValidationError::EmptyImageLabelName(
                    "spec.buildDefaults.imageLabels[1].name".to_string()
                ),
                &ValidationError::EmptyImageLabelName(
                    "spec.buildOverrides.imageLabels[0].name".to_string()
                ),
            ]
        );
        assert!(err
            .to_string()
            .starts_with("Build is invalid: Build must be named \"cluster\""));
    }
}
