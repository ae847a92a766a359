use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Acknowledgement body returned by write endpoints: `{"status": "ok"}`.
#[derive(Serialize, Debug)]
pub struct Status {
    pub status: &'static str,
}

impl Status {
    pub fn ok() -> Self { Self { status: "ok" } }
}
