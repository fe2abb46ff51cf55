pub mod product;
pub mod programming_language;
