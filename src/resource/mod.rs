//! Managed resource handlers.

pub mod channel;

#[cfg(test)]
mod test;
