mod crd;
mod read;

pub use crd::{
    build_crd, openapi_schema, render_crd, API_APPROVAL_URL, API_APPROVED_ANNOTATION,
    BUILD_CAPABILITY, CAPABILITY_ANNOTATION,
};
pub use read::{read_build_from_file, validate_manifest};
