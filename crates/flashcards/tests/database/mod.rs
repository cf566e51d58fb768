use super::*;

mod add;
mod query;
mod remove;
