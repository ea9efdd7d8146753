use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font face
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the logo
    Image(#[from] image::ImageError),

    /// A page id in the page order did not resolve to a stored page
    #[error("page referenced in the page order is missing from the document")]
    MissingPage,
}
