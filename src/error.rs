// One error type for the whole app.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    InvalidDimensions(usize, usize), // A buffer was asked for with a zero side
    ColorDecode(String),             // A color literal was not `#RRGGBB`
    WindowInit(String),              // Creating the window failed
    WindowUpdate(String),            // Updating the window buffer failed
    TextureLoad(String),             // Reading/decoding the base texture failed
    SpriteSave(String),              // Encoding/writing the sprite files failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions(w, h) => write!(f, "Invalid buffer dimensions: {w}x{h}"),
            Error::ColorDecode(s) => write!(f, "Color decode error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::TextureLoad(s) => write!(f, "Texture load error: {s}"),
            Error::SpriteSave(s) => write!(f, "Sprite save error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
