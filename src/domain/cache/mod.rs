//! Cache domain - Named region configuration

mod properties;
mod region;
mod registry;
mod serializer;

pub use properties::BaseProperties;
pub use region::{resolve_base_config, resolve_named_config, RegionConfig, REGION_PREFIX_SEPARATOR};
pub use registry::{
    build_registry, parse_overrides, reference_overrides, RegionOverride, RegionOverrideConfig,
    RegionRegistry,
};
pub use serializer::SerializerKind;
