use serde::{Deserialize, Serialize};

use super::person::{PersonId, PersonNode};

/// En nod i en filtrerad grenvy
///
/// Personen klonas från ögonblicksbilden, källdatan ändras aldrig. Dolda
/// ättlingar serialiseras som `hasHiddenDescendants`/`hiddenDescendantCount`
/// bredvid personens egna fält, vilket är vad renderingslagret läser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    #[serde(flatten)]
    pub person: PersonNode,
    #[serde(
        rename = "hasHiddenDescendants",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub has_hidden_descendants: bool,
    #[serde(
        rename = "hiddenDescendantCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hidden_descendant_count: Option<usize>,
}

impl BranchNode {
    pub fn visible(person: PersonNode) -> Self {
        Self {
            person,
            has_hidden_descendants: false,
            hidden_descendant_count: None,
        }
    }

    pub fn with_hidden(person: PersonNode, hidden: usize) -> Self {
        Self {
            person,
            has_hidden_descendants: true,
            hidden_descendant_count: Some(hidden),
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.person.id
    }

    /// Antal dolda ättlingar (0 om inget är dolt)
    pub fn hidden_count(&self) -> usize {
        self.hidden_descendant_count.unwrap_or(0)
    }
}

/// Summa av alla dolda ättlingar i en grenvy
pub fn hidden_total(nodes: &[BranchNode]) -> usize {
    nodes.iter().map(BranchNode::hidden_count).sum()
}
