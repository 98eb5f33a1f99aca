use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};

/// A single due item on one calendar date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub title: String,
    pub time: String,
    #[serde(rename = "class")]
    pub class_name: String,
}

impl Assignment {
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            class_name: class_name.into(),
        }
    }

    /// Every field must be non-blank. Fields are checked in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Class Name", &self.class_name)?;
        require("Assignment Title", &self.title)?;
        require("Due Time", &self.time)?;
        Ok(())
    }
}
