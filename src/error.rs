use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("Invalid slider ID.")]
    InvalidId,

    #[error("Slider {id} not found or not published.")]
    NotPublished { id: u64 },

    #[error("No products or custom slides selected for this slider.")]
    NothingConfigured,

    #[error("No valid slides found.")]
    NoValidSlides,

    #[error("Document error: {0}")]
    Document(String),
}
