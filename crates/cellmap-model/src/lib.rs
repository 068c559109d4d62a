pub mod bundle;
pub mod configuration;
pub mod constraint;
pub mod datatype;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod sample;

pub use bundle::{DraftBundle, ImportBaseline};
pub use configuration::{ConfigurationMetadata, DraftConfiguration, ExportConfiguration};
pub use constraint::Constraint;
pub use datatype::DataType;
pub use error::ValidationError;
pub use ids::{IdFactory, RandomIds, SequentialIds, create_id};
pub use mapping::{
    ExportInputMapping, ExportOutputMapping, InputMapping, MappingKind, OutputMapping,
};
pub use sample::{SAMPLE_CREATED_AT, sample_configuration};
