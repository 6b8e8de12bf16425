pub mod config;
pub mod logging;

pub mod conversion;
pub mod report;
pub mod url_model;

pub use conversion::{convert, Conversion, ConversionError, ConversionRequest, DOLLAR_RATE};
pub use url_model::{CambioUrl, ParameterError, ValidationError};
