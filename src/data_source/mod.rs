//! Data source handlers.

pub mod server;

#[cfg(test)]
mod test;
