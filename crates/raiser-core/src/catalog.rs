//! Elephant Catalog & Raise List
//!
//! The site lets a visitor pick elephants to sponsor ("raise") before
//! heading to checkout. The catalog is a fixed, client-side herd; the raise
//! list is ordered, duplicate-free frontend state.

use serde::{Deserialize, Serialize};

/// One sponsorable elephant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elephant {
    pub name: String,
    pub affiliation: String,
    pub species: String,
    pub sex: String,
    pub wikilink: String,
    pub image: String,
    pub note: String,
    /// Monthly sponsorship amount in whole USD
    pub price: u32,
}

/// The built-in herd
pub fn herd() -> Vec<Elephant> {
    vec![
        Elephant {
            name: "Packy".into(),
            affiliation: "Oregon Zoo".into(),
            species: "Asian".into(),
            sex: "Male".into(),
            wikilink: "https://en.wikipedia.org/wiki/Packy".into(),
            image: "/static/img/packy.jpg".into(),
            note: "First elephant born in the Western Hemisphere in 44 years.".into(),
            price: 14,
        },
        Elephant {
            name: "Hanako".into(),
            affiliation: "Inokashira Park Zoo".into(),
            species: "Asian".into(),
            sex: "Female".into(),
            wikilink: "https://en.wikipedia.org/wiki/Hanako_(elephant)".into(),
            image: "/static/img/hanako.jpg".into(),
            note: "Japan's oldest elephant, beloved for over six decades.".into(),
            price: 12,
        },
        Elephant {
            name: "Echo".into(),
            affiliation: "Amboseli National Park".into(),
            species: "African".into(),
            sex: "Female".into(),
            wikilink: "https://en.wikipedia.org/wiki/Echo_(elephant)".into(),
            image: "/static/img/echo.jpg".into(),
            note: "Matriarch studied for almost 40 years in Kenya.".into(),
            price: 17,
        },
        Elephant {
            name: "Lin Wang".into(),
            affiliation: "Taipei Zoo".into(),
            species: "Asian".into(),
            sex: "Male".into(),
            wikilink: "https://en.wikipedia.org/wiki/Lin_Wang".into(),
            image: "/static/img/lin-wang.jpg".into(),
            note: "Served in the Second World War, lived to 86.".into(),
            price: 15,
        },
        Elephant {
            name: "Jumbo".into(),
            affiliation: "London Zoo".into(),
            species: "African".into(),
            sex: "Male".into(),
            wikilink: "https://en.wikipedia.org/wiki/Jumbo".into(),
            image: "/static/img/jumbo.jpg".into(),
            note: "The original 'jumbo'; the most famous elephant of the 19th century.".into(),
            price: 19,
        },
    ]
}

/// Elephants picked for sponsorship, in pick order, without duplicates
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RaiseList {
    picks: Vec<Elephant>,
}

impl RaiseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an elephant; re-adding the same one is a no-op.
    /// Returns whether the list changed.
    pub fn add(&mut self, elephant: Elephant) -> bool {
        if self.picks.iter().any(|e| e.name == elephant.name) {
            return false;
        }
        self.picks.push(elephant);
        true
    }

    /// Remove by name; unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.picks.len();
        self.picks.retain(|e| e.name != name);
        self.picks.len() != before
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn picks(&self) -> &[Elephant] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Total sponsorship amount in whole USD
    pub fn total_amount(&self) -> u32 {
        self.picks.iter().map(|e| e.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(name: &str, price: u32) -> Elephant {
        Elephant {
            name: name.into(),
            affiliation: "Test Zoo".into(),
            species: "Asian".into(),
            sex: "Female".into(),
            wikilink: String::new(),
            image: String::new(),
            note: String::new(),
            price,
        }
    }

    #[test]
    fn test_add_deduplicates_by_name() {
        let mut list = RaiseList::new();
        assert!(list.add(pick("Hanako", 12)));
        assert!(!list.add(pick("Hanako", 12)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_and_total() {
        let mut list = RaiseList::new();
        list.add(pick("Packy", 14));
        list.add(pick("Echo", 17));
        assert_eq!(list.total_amount(), 31);

        assert!(list.remove("Packy"));
        assert!(!list.remove("Packy"));
        assert_eq!(list.total_amount(), 17);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut list = RaiseList::new();
        assert!(list.is_empty());
        assert_eq!(list.total_amount(), 0);

        list.add(pick("Jumbo", 19));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_herd_names_are_unique() {
        let herd = herd();
        let mut list = RaiseList::new();
        for elephant in herd.clone() {
            assert!(list.add(elephant));
        }
        assert_eq!(list.len(), herd.len());
    }
}
