//! Grenvy: avgränsad delgraf kring en fokusperson
//!
//! Vyn innehåller fokuspersonen, alla förfäder upp till roten, alla ättlingar
//! (obegränsat djup), syskon samt farbröder/fastrar. Syskonens och
//! farbröders/fastrars barn tas inte med; i stället markeras föräldern med
//! antalet dolda barn.

use std::collections::{HashMap, HashSet};

use crate::models::{BranchNode, PersonId, PersonNode};

use super::person_index::PersonIndex;

/// Tjänst för att filtrera fram en grenvy
///
/// Förfäderna följs ända upp till roten. Besökta id:n stoppar vandringen
/// vid cykler, så inget djuptak behövs här.
#[derive(Debug, Clone, Default)]
pub struct BranchFilter;

impl BranchFilter {
    pub fn new() -> Self {
        Self
    }

    /// Bygg grenvyn för `focus_id` ur hela ögonblicksbilden
    ///
    /// Okänd fokusperson ger en tom vy. Resultatet följer ordningen i
    /// `all_nodes` och innehåller kloner; indata ändras inte.
    pub fn filter_for_branch(&self, focus_id: &str, all_nodes: &[PersonNode]) -> Vec<BranchNode> {
        let index = PersonIndex::build(all_nodes);
        self.filter_indexed(focus_id, &index, all_nodes)
    }

    /// Som `filter_for_branch` men med ett redan byggt index
    pub fn filter_indexed(
        &self,
        focus_id: &str,
        index: &PersonIndex,
        all_nodes: &[PersonNode],
    ) -> Vec<BranchNode> {
        let Some(focus) = index.get(focus_id) else {
            tracing::debug!("Grenvy: fokusperson {} finns inte", focus_id);
            return Vec::new();
        };

        let mut visible: HashSet<&str> = HashSet::new();
        let mut hidden: HashMap<&str, usize> = HashMap::new();

        visible.insert(focus.id.as_str());
        Self::add_ancestors(focus, index, &mut visible);
        Self::add_descendants(focus.id.as_str(), index, &mut visible);

        let father = index.father(focus);

        // Syskon: med, men deras barn bara som antal
        if let Some(father_id) = focus.father_id.as_ref() {
            Self::add_collateral(
                index.child_ids(father_id.as_str()),
                focus.id.as_str(),
                index,
                &mut visible,
                &mut hidden,
            );
        }

        // Farbröder/fastrar: farfaderns övriga barn, kusiner bara som antal
        if let (Some(father), Some(grandfather)) = (father, father.and_then(|f| index.father(f))) {
            if grandfather.id != father.id {
                Self::add_collateral(
                    index.child_ids(grandfather.id.as_str()),
                    father.id.as_str(),
                    index,
                    &mut visible,
                    &mut hidden,
                );
            }
        }

        let nodes: Vec<BranchNode> = all_nodes
            .iter()
            .filter(|node| visible.contains(node.id.as_str()))
            .map(|node| match hidden.get(node.id.as_str()) {
                Some(&count) => BranchNode::with_hidden(node.clone(), count),
                None => BranchNode::visible(node.clone()),
            })
            .collect();

        tracing::debug!(
            "Grenvy för {}: {} synliga, {} med dolda ättlingar",
            focus_id,
            nodes.len(),
            hidden.len()
        );

        nodes
    }

    fn add_ancestors<'i>(focus: &'i PersonNode, index: &'i PersonIndex, visible: &mut HashSet<&'i str>) {
        let mut current = focus;
        while let Some(father) = index.father(current) {
            if !visible.insert(father.id.as_str()) {
                break;
            }
            current = father;
        }
    }

    fn add_descendants<'i>(root_id: &'i str, index: &'i PersonIndex, visible: &mut HashSet<&'i str>) {
        let mut stack: Vec<&PersonId> = index.child_ids(root_id).iter().collect();
        while let Some(child_id) = stack.pop() {
            if visible.insert(child_id.as_str()) {
                stack.extend(index.child_ids(child_id.as_str()));
            }
        }
    }

    /// Lägg till `candidates` utom `skip_id`; markera de som har egna barn
    ///
    /// Redan synliga noder hoppas över, deras barn visas redan i direkta linjen.
    fn add_collateral<'i>(
        candidates: &'i [PersonId],
        skip_id: &str,
        index: &'i PersonIndex,
        visible: &mut HashSet<&'i str>,
        hidden: &mut HashMap<&'i str, usize>,
    ) {
        for id in candidates {
            let id = id.as_str();
            if id == skip_id || visible.contains(id) {
                continue;
            }
            visible.insert(id);
            let child_count = index.child_ids(id).len();
            if child_count > 0 {
                hidden.insert(id, child_count);
            }
        }
    }
}

/// Bekvämlighetsfunktion med standardinställningar
pub fn filter_for_branch(focus_id: &str, all_nodes: &[PersonNode]) -> Vec<BranchNode> {
    BranchFilter::new().filter_for_branch(focus_id, all_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{hidden_total, Gender};

    fn ids(nodes: &[BranchNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id().as_str()).collect()
    }

    /// Farfar G har barnen F (far) och U (farbror). U har två barn.
    /// F har barnen X (fokus) och S (syskon). S har två barn.
    /// X har barnet Y som har barnet Z.
    fn family() -> Vec<PersonNode> {
        vec![
            PersonNode::new("R", "Rot", Gender::Male),
            PersonNode::new("G", "Ghazi", Gender::Male).with_father("R"),
            PersonNode::new("F", "Fahd", Gender::Male).with_father("G"),
            PersonNode::new("U", "Umar", Gender::Male).with_father("G"),
            PersonNode::new("A", "Amal", Gender::Female).with_father("G"),
            PersonNode::new("U1", "Kusin 1", Gender::Male).with_father("U"),
            PersonNode::new("U2", "Kusin 2", Gender::Female).with_father("U"),
            PersonNode::new("X", "Khalid", Gender::Male).with_father("F"),
            PersonNode::new("S", "Salman", Gender::Male).with_father("F"),
            PersonNode::new("S1", "Syskonbarn 1", Gender::Male).with_father("S"),
            PersonNode::new("S2", "Syskonbarn 2", Gender::Female).with_father("S"),
            PersonNode::new("Y", "Yasir", Gender::Male).with_father("X"),
            PersonNode::new("Z", "Ziyad", Gender::Male).with_father("Y"),
            PersonNode::new("O", "Annan gren", Gender::Male),
        ]
    }

    #[test]
    fn test_missing_focus_gives_empty() {
        assert!(filter_for_branch("saknas", &family()).is_empty());
        assert!(filter_for_branch("X", &[]).is_empty());
    }

    #[test]
    fn test_full_branch() {
        let view = filter_for_branch("X", &family());

        assert_eq!(ids(&view), vec!["R", "G", "F", "U", "A", "X", "S", "Y", "Z"]);

        let s = view.iter().find(|n| n.id().as_str() == "S").unwrap();
        assert!(s.has_hidden_descendants);
        assert_eq!(s.hidden_descendant_count, Some(2));

        let u = view.iter().find(|n| n.id().as_str() == "U").unwrap();
        assert_eq!(u.hidden_descendant_count, Some(2));

        // Amal har inga barn och ska inte markeras
        let a = view.iter().find(|n| n.id().as_str() == "A").unwrap();
        assert!(!a.has_hidden_descendants);
        assert_eq!(a.hidden_descendant_count, None);

        // Direkta linjen markeras aldrig
        let y = view.iter().find(|n| n.id().as_str() == "Y").unwrap();
        assert!(!y.has_hidden_descendants);

        assert_eq!(hidden_total(&view), 4);
    }

    #[test]
    fn test_descendants_are_complete() {
        let nodes = vec![
            PersonNode::new("A", "A", Gender::Male),
            PersonNode::new("B", "B", Gender::Male).with_father("A"),
            PersonNode::new("C", "C", Gender::Female).with_father("A"),
            PersonNode::new("D", "D", Gender::Male).with_father("B"),
        ];

        let view = filter_for_branch("A", &nodes);
        assert_eq!(ids(&view), vec!["A", "B", "C", "D"]);
        assert!(view.iter().all(|n| !n.has_hidden_descendants));
    }

    #[test]
    fn test_root_focus_has_no_collateral() {
        let view = filter_for_branch("R", &family());
        // Roten ser hela sitt träd men inte den andra grenen
        assert_eq!(view.len(), family().len() - 1);
        assert!(!ids(&view).contains(&"O"));
        assert_eq!(hidden_total(&view), 0);
    }

    #[test]
    fn test_father_without_brothers() {
        let view = filter_for_branch("F", &family());
        // F: far G, farfar R. Farbröder = R:s övriga barn (inga).
        // Syskon U och A; U:s barn döljs.
        let visible = ids(&view);
        assert!(visible.contains(&"U"));
        assert!(visible.contains(&"A"));
        assert!(!visible.contains(&"U1"));
        assert!(visible.contains(&"S1"));
        assert!(visible.contains(&"Z"));

        let u = view.iter().find(|n| n.id().as_str() == "U").unwrap();
        assert_eq!(u.hidden_descendant_count, Some(2));
    }

    #[test]
    fn test_idempotent() {
        let nodes = family();
        let filter = BranchFilter::new();
        let first = filter.filter_for_branch("X", &nodes);
        let second = filter.filter_for_branch("X", &nodes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_not_mutated() {
        let nodes = family();
        let before = nodes.clone();
        let _ = filter_for_branch("X", &nodes);
        assert_eq!(nodes, before);
    }

    #[test]
    fn test_cycle_terminates() {
        let nodes = vec![
            PersonNode::new("a", "A", Gender::Male).with_father("c"),
            PersonNode::new("b", "B", Gender::Male).with_father("a"),
            PersonNode::new("c", "C", Gender::Male).with_father("b"),
            PersonNode::new("d", "D", Gender::Male).with_father("a"),
        ];

        let view = filter_for_branch("a", &nodes);
        assert_eq!(ids(&view), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_dangling_father_reference() {
        let nodes = vec![
            PersonNode::new("x", "X", Gender::Male).with_father("borta"),
            PersonNode::new("s", "S", Gender::Male).with_father("borta"),
            PersonNode::new("s1", "S1", Gender::Male).with_father("s"),
        ];

        // Fadern saknas men syskonen delar ändå father_id
        let view = filter_for_branch("x", &nodes);
        assert_eq!(ids(&view), vec!["x", "s"]);
        assert_eq!(view[1].hidden_descendant_count, Some(1));
    }

    #[test]
    fn test_prebuilt_index() {
        let nodes = family();
        let index = PersonIndex::build(&nodes);
        let filter = BranchFilter::new();

        assert_eq!(
            filter.filter_indexed("S", &index, &nodes),
            filter.filter_for_branch("S", &nodes)
        );
    }

    #[test]
    fn test_deep_ancestors_reach_root() {
        // 30 generationer: p0 <- p1 <- ... <- p29
        let nodes: Vec<PersonNode> = (0..30)
            .map(|i| {
                let node = PersonNode::new(format!("p{}", i), format!("N{}", i), Gender::Male);
                if i > 0 {
                    node.with_father(format!("p{}", i - 1))
                } else {
                    node
                }
            })
            .collect();

        let view = filter_for_branch("p29", &nodes);
        assert_eq!(view.len(), 30);
        assert!(ids(&view).contains(&"p0"));
        assert_eq!(hidden_total(&view), 0);
    }

    #[test]
    fn test_self_father_not_marked_as_sibling() {
        let nodes = vec![
            PersonNode::new("a", "A", Gender::Male).with_father("a"),
            PersonNode::new("b", "B", Gender::Male).with_father("a"),
            PersonNode::new("c", "C", Gender::Male).with_father("b"),
        ];

        let view = filter_for_branch("a", &nodes);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
        assert!(view.iter().all(|n| !n.has_hidden_descendants));
    }

    #[test]
    fn test_father_is_root() {
        // G:s far R saknar far, så det finns inga farbröder/fastrar
        let view = filter_for_branch("G", &family());
        let visible = ids(&view);

        assert!(visible.contains(&"R"));
        assert!(visible.contains(&"G"));
        assert!(!visible.contains(&"O"));
        assert_eq!(view.len(), family().len() - 1);
        assert!(view.iter().all(|n| !n.has_hidden_descendants));
        assert_eq!(hidden_total(&view), 0);
    }
}
