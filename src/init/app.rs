use std::path::Path;

use rand::Rng;

use super::json;
use crate::{App, Error};

impl<R: Rng> App<R> {
    pub fn try_from_file<P: AsRef<Path>>(settings_file_path: P, rng: R) -> Result<Self, Error> {
        let settings = json::parse_settings(settings_file_path).map_err(Error::Settings)?;
        Self::try_new(settings, rng)
    }
}
