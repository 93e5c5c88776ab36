pub mod hooks;
pub mod loggers;
pub mod propagators;
pub mod providers;
