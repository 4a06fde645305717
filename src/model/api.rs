use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
