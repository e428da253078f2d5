pub mod crop_content;
pub mod domain;
