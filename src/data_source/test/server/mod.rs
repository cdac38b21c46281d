use super::*;

mod configure;
