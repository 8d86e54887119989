//! Domain layer - Cache region configuration

pub mod cache;
pub mod error;

pub use cache::{
    build_registry, BaseProperties, RegionConfig, RegionOverride, RegionRegistry, SerializerKind,
};
pub use error::DomainError;
