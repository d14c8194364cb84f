mod grayscale;

pub use grayscale::{grayscale, grayscale_in_place};
