pub mod generate_reading;
pub mod inspect_config;
