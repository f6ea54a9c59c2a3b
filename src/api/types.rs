use serde::{Deserialize, Serialize};

/// Body of `POST /ping` and `POST /reset`: the address specifications to
/// probe or clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressesRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
