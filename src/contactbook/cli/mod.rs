mod commands;
mod print;
mod setup;
mod view;

pub use commands::run;
