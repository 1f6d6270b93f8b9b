use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};

/// One element of a projection list: which document field to extract and the
/// type its tuple slot carries. The projection list is fixed for the lifetime
/// of a cursor and its order is the output tuple order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub data_type: DataType,
}

impl Attribute {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Attribute {
            name: name.to_string(),
            data_type,
        }
    }
}
