//! Syskonordning utifrån HID-suffix
//!
//! Sista segmentet i `hid` ("3.2.1" → 1) anger födelseordning. Högre värde
//! betyder äldre syskon, så äldst visas först vid fallande sortering.

use std::cmp::Reverse;

use crate::models::PersonNode;

/// Sista HID-segmentet som heltal, 0 om det saknas eller inte går att tolka
pub fn birth_order_key(person: &PersonNode) -> u64 {
    person
        .hid
        .as_deref()
        .and_then(|hid| hid.rsplit('.').next())
        .and_then(|segment| segment.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Stabil sortering, äldst (högst suffix) först
pub fn sort_siblings_oldest_first<'a, I>(people: I) -> Vec<&'a PersonNode>
where
    I: IntoIterator<Item = &'a PersonNode>,
{
    let mut sorted: Vec<&PersonNode> = people.into_iter().collect();
    sorted.sort_by_key(|p| Reverse(birth_order_key(p)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn sibling(id: &str, hid: Option<&str>) -> PersonNode {
        let node = PersonNode::new(id, id, Gender::Male);
        match hid {
            Some(h) => node.with_hid(h),
            None => node,
        }
    }

    #[test]
    fn test_birth_order_key() {
        assert_eq!(birth_order_key(&sibling("a", Some("3.2.1"))), 1);
        assert_eq!(birth_order_key(&sibling("b", Some("12"))), 12);
        assert_eq!(birth_order_key(&sibling("c", Some("4.x"))), 0);
        assert_eq!(birth_order_key(&sibling("d", Some(""))), 0);
        assert_eq!(birth_order_key(&sibling("e", Some("1.2."))), 0);
        assert_eq!(birth_order_key(&sibling("f", Some("1.-2"))), 0);
        assert_eq!(birth_order_key(&sibling("g", None)), 0);
    }

    #[test]
    fn test_oldest_first() {
        let people = vec![
            sibling("one", Some("5.1")),
            sibling("two", Some("5.2")),
            sibling("three", Some("5.3")),
        ];

        let ids: Vec<&str> = sort_siblings_oldest_first(&people)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["three", "two", "one"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let people = vec![
            sibling("x", None),
            sibling("y", Some("2.2")),
            sibling("z", Some("trasig")),
            sibling("w", Some("2.0")),
        ];

        let ids: Vec<&str> = sort_siblings_oldest_first(&people)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // Nyckel 0 för x, z och w behåller inbördes ordning
        assert_eq!(ids, vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn test_sort_empty() {
        let people: Vec<PersonNode> = Vec::new();
        assert!(sort_siblings_oldest_first(&people).is_empty());
    }
}
