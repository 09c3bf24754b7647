// Health module: liveness endpoint

pub mod controllers;
