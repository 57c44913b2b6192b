use crate::types::err::{self};

/// A bounded configuration option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl ConfigOption<usize> {
    /// Sets the value of the option, if within bounds.
    pub fn set(&mut self, value: usize) -> Result<(), err::ConfigError> {
        let (min, max) = self.min_max();

        if min <= value && value <= max {
            self.value = value;
            Ok(())
        } else {
            Err(err::ConfigError::OutOfRange {
                name: self.name,
                min,
                max,
            })
        }
    }
}
