use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by successful writes.
#[derive(Serialize, Debug, PartialEq)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self { Self { success: true } }
}
