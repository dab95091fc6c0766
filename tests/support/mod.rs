#![allow(dead_code)]

pub mod credit_csv;
pub mod credit_env;
