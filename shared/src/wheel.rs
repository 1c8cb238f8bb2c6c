use serde::{Deserialize, Serialize};

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub color: String,
}

impl Slice {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// The slice set rendered when the host page does not supply its own.
pub fn default_slices() -> Vec<Slice> {
    vec![
        Slice::new("T-shirt", "#EF4444"),
        Slice::new("USB Flash", "#F59E0B"),
        Slice::new("Cap", "#10B981"),
        Slice::new("Arif Try!", "#3B82F6"),
        Slice::new("Arif Luck Next Time!", "#8B5CF6"),
        Slice::new("Stay Arif!", "#EC4899"),
    ]
}

/// The authoritative result of one spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub slice_index: usize,
    pub label: String,
    pub is_prize: bool,
    pub all_prizes_gone: bool,
}

// === API Types ===

/// Body of a successful `POST /api/spin`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinResponse {
    pub slice_index: usize,
    pub label: String,
    #[serde(default)]
    pub prize: bool,
    #[serde(default)]
    pub all_prizes_gone: bool,
}

impl From<SpinResponse> for SpinOutcome {
    fn from(response: SpinResponse) -> Self {
        Self {
            slice_index: response.slice_index,
            label: response.label,
            is_prize: response.prize,
            all_prizes_gone: response.all_prizes_gone,
        }
    }
}

/// Body of a `409 Conflict` from `POST /api/spin`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConflictBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub all_prizes_gone: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeStats {
    pub name: String,
    pub total: u32,
    pub remaining: u32,
    pub weight: u32,
}

/// Snapshot served to the admin dashboard.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryStats {
    pub prizes: Vec<PrizeStats>,
    pub total_spins: u64,
    pub total_wins: u64,
    pub all_prizes_gone: bool,
}
