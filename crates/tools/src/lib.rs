pub mod checks;
pub mod logging;
pub mod report;
pub mod seed;
pub mod settings;
