use super::*;

mod configure;
mod create;
mod delete;
mod import_state;
mod read;
mod update;
