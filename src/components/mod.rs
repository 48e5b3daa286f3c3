pub mod carousel;
pub mod showcase;
pub mod template;
