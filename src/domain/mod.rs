pub mod column_map;
pub mod entities;
pub mod normalize;
pub mod time_codec;
