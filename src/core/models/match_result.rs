use crate::core::models::WireMatch;
use crate::global_constants;

/// One look-alike candidate, with `similarity` normalised to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub name: String,
    pub similarity: f32,
    pub image_path: String,
}

impl MatchResult {
    pub fn new(name: String, similarity: f32, image_path: String) -> Self {
        Self {
            name,
            similarity,
            image_path,
        }
    }

    /// The service reports similarity on a 0-100 scale.
    pub fn from_wire(record: WireMatch) -> Self {
        Self {
            name: record.name,
            similarity: record.similarity / global_constants::SIMILARITY_WIRE_SCALE,
            image_path: record.image_path,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn similarity_percent_label(&self) -> String {
        format!("{:.2}%", self.similarity * global_constants::SIMILARITY_WIRE_SCALE)
    }
}
