mod cli;
mod common;
mod scheduling;
