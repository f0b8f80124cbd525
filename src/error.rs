use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    /// The canvas cannot hold a terrain band or a ship clear of the pad.
    InvalidCanvas { width: f64, height: f64 },
    /// A game was assembled around a pad that the terrain never placed.
    UnplacedLandingPad { x: f64 },
    Settings(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCanvas { width, height } => {
                write!(f, "Canvas {width}x{height} is too small to play on")
            }
            Error::UnplacedLandingPad { x } => {
                write!(f, "Landing pad at x={x} was never placed on the terrain")
            }
            Error::Settings(reason) => write!(f, "Invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        val.to_string()
    }
}
