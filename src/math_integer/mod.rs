pub mod normalization;
pub mod trigonometry;
