// src/ui/mod.rs
pub mod dashboard;
pub mod home;
