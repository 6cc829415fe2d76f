pub mod error;
pub mod open_meteo;
pub mod provider;
pub mod response;
pub mod source;
