use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("block already exists with identifier \"{identifier}\"")]
    DuplicateIdentifier { identifier: String },

    #[error("unable to compile block document: no output path specified in config")]
    MissingOutputConfiguration,

    #[error("type error: {0}")]
    Type(#[from] unshatterable_types::TypeError),

    #[error("output error: {0}")]
    Output(#[from] unshatterable_output::OutputError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
