pub mod a001_material;
pub mod a002_provider;
