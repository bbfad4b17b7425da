mod common;
mod policy;
mod rules;
