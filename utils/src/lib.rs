mod file;
mod logging;
mod schema_validation;

pub use file::{read_manifest, read_manifest_string};
pub use logging::{log_level_from_env, setup_logging};
pub use schema_validation::{
    openapi_to_json_schema, schema_errors, validate_manifest_schema, yaml_to_json,
};
