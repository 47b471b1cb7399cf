use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoatyardError {
    #[error("record is missing the {0} field")]
    MissingField(&'static str),

    #[error("unknown location category '{0}'")]
    UnknownCategory(String),

    #[error("the {0} field is empty")]
    EmptyValue(&'static str),

    #[error("the fleet is full ({0} vessels)")]
    CapacityExceeded(usize),

    #[error("no boat named '{0}'")]
    NotFound(String),

    #[error("a payment of ${amount:.2} is more than the ${owed:.2} owed")]
    Overpayment { amount: f64, owed: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BoatyardError>;
