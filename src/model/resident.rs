use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResidentDto {
    pub id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateResidentDto {
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateResidentDto {
    #[serde(default)]
    pub code: Option<String>,
}
