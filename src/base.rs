pub type Score = f64;
pub type PValue = f64;
pub type DisplayScore = f32;
pub type Rank = usize;
pub type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Marks object that have a length
pub trait Len {
    fn len(&self) -> usize;
}
