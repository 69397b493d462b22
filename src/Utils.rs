/// logger initialisation (terminal and file) on top of the `log` facade
pub mod logger;
