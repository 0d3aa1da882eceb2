use indexmap::IndexMap;
use indexmap::map::Values;
use uuid::Uuid;

use crate::models::Event;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// What applying a live update did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleChange {
    Replaced,
    Relocated,
    Added,
}

/// Events grouped by category. Categories and the events inside them keep
/// the order they were first seen in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleBoard {
    categories: IndexMap<String, IndexMap<Uuid, Event>>,
}

pub fn category_of(event: &Event) -> &str {
    match event.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category,
        _ => UNCATEGORIZED,
    }
}

impl ScheduleBoard {
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut board = Self::default();
        for event in events {
            board.push(event);
        }
        board
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, Values<'_, Uuid, Event>)> {
        self.categories
            .iter()
            .map(|(category, events)| (category.as_str(), events.values()))
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(IndexMap::is_empty)
    }

    pub fn find(&self, event_id: Uuid) -> Option<&Event> {
        self.categories
            .values()
            .find_map(|events| events.get(&event_id))
    }

    /// Merges the post-update image of an event. An event whose category
    /// changed moves to the end of its new category.
    pub fn apply_update(&mut self, event: Event) -> ScheduleChange {
        let Some(current) = self
            .categories
            .iter()
            .find(|(_, events)| events.contains_key(&event.event_id))
            .map(|(category, _)| category.clone())
        else {
            self.push(event);
            return ScheduleChange::Added;
        };

        if current == category_of(&event) {
            if let Some(slot) = self
                .categories
                .get_mut(&current)
                .and_then(|events| events.get_mut(&event.event_id))
            {
                *slot = event;
            }
            return ScheduleChange::Replaced;
        }

        if let Some(events) = self.categories.get_mut(&current) {
            events.shift_remove(&event.event_id);
            if events.is_empty() {
                self.categories.shift_remove(&current);
            }
        }
        self.push(event);
        ScheduleChange::Relocated
    }

    fn push(&mut self, event: Event) {
        self.categories
            .entry(category_of(&event).to_string())
            .or_default()
            .insert(event.event_id, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    fn event(name: &str, category: Option<&str>) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.map(String::from),
            event_type: EventType::Individual,
            is_championship_event: true,
            status: "Upcoming".to_string(),
            venue: Some("Stage 1".to_string()),
            scheduled_at: None,
        }
    }

    fn layout(board: &ScheduleBoard) -> Vec<(&str, Vec<&str>)> {
        board
            .categories()
            .map(|(category, events)| (category, events.map(|e| e.name.as_str()).collect()))
            .collect()
    }

    #[test]
    fn test_grouping_keeps_insertion_order() {
        let board = ScheduleBoard::from_events(vec![
            event("Kathakali", Some("Dance")),
            event("Elocution", Some("Literary")),
            event("Oppana", Some("Dance")),
        ]);

        assert_eq!(
            layout(&board),
            vec![
                ("Dance", vec!["Kathakali", "Oppana"]),
                ("Literary", vec!["Elocution"]),
            ]
        );
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_missing_category_falls_back() {
        let board = ScheduleBoard::from_events(vec![
            event("Quiz", None),
            event("Essay", Some("   ")),
        ]);

        assert_eq!(layout(&board), vec![(UNCATEGORIZED, vec!["Quiz", "Essay"])]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let first = event("Kathakali", Some("Dance"));
        let second = event("Oppana", Some("Dance"));
        let mut board = ScheduleBoard::from_events(vec![first.clone(), second]);

        let mut updated = first.clone();
        updated.status = "Ongoing".to_string();

        assert_eq!(board.apply_update(updated), ScheduleChange::Replaced);
        assert_eq!(layout(&board), vec![("Dance", vec!["Kathakali", "Oppana"])]);
        assert_eq!(board.find(first.event_id).unwrap().status, "Ongoing");
    }

    #[test]
    fn test_category_change_relocates_event() {
        let moved = event("Mappilappattu", Some("Music"));
        let mut board = ScheduleBoard::from_events(vec![
            moved.clone(),
            event("Kathakali", Some("Dance")),
        ]);

        let mut updated = moved.clone();
        updated.category = Some("Dance".to_string());

        assert_eq!(board.apply_update(updated), ScheduleChange::Relocated);
        assert_eq!(
            layout(&board),
            vec![("Dance", vec!["Kathakali", "Mappilappattu"])]
        );
    }

    #[test]
    fn test_relocation_creates_new_category() {
        let moved = event("Debate", Some("Literary"));
        let mut board = ScheduleBoard::from_events(vec![
            moved.clone(),
            event("Essay", Some("Literary")),
        ]);

        let mut updated = moved.clone();
        updated.category = None;

        assert_eq!(board.apply_update(updated), ScheduleChange::Relocated);
        assert_eq!(
            layout(&board),
            vec![("Literary", vec!["Essay"]), (UNCATEGORIZED, vec!["Debate"])]
        );
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_unknown_event_is_added() {
        let mut board = ScheduleBoard::from_events(vec![event("Kathakali", Some("Dance"))]);

        let change = board.apply_update(event("Chenda", Some("Instrumental")));

        assert_eq!(change, ScheduleChange::Added);
        assert_eq!(
            layout(&board),
            vec![("Dance", vec!["Kathakali"]), ("Instrumental", vec!["Chenda"])]
        );
        assert!(!board.is_empty());
    }

    #[test]
    fn test_replace_after_relocation_keeps_new_category() {
        let moved = event("Vattappattu", Some("Music"));
        let mut board = ScheduleBoard::from_events(vec![
            moved.clone(),
            event("Oppana", Some("Dance")),
        ]);

        let mut relocated = moved.clone();
        relocated.category = Some("Dance".to_string());
        board.apply_update(relocated.clone());

        let mut finished = relocated;
        finished.status = "Completed".to_string();

        assert_eq!(board.apply_update(finished), ScheduleChange::Replaced);
        assert_eq!(
            layout(&board),
            vec![("Dance", vec!["Oppana", "Vattappattu"])]
        );
        assert_eq!(board.find(moved.event_id).unwrap().status, "Completed");
    }
}
