#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateImageInput {
    pub theme: String,
    pub caption: Option<String>,
}
