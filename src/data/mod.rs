pub mod csv;
pub mod normalize;
pub mod row;
