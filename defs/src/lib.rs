mod build;
mod errors;
mod merge;
mod proxy;
mod quantity;
mod validation;

pub use build::{
    Build, BuildDefaults, BuildList, BuildOverrides, BuildSpec, ImageLabel, API_GROUP,
    API_VERSION, BUILD_KIND, BUILD_PLURAL, CLUSTER_BUILD_NAME,
};
pub use errors::ValidationError;
pub use proxy::{ConfigMapNameReference, ProxySpec};
pub use quantity::normalize_quantities;
pub use validation::{validate_build, validate_image_label};
