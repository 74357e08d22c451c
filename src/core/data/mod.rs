pub mod classified_point_set;
pub mod colour;
pub mod complex;
pub mod display_hint;
pub mod lattice;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
