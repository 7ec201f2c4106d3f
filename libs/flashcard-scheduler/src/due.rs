//! Due-date checks and study queue assembly.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::format_date;
use crate::types::CardSchedule;

/// A card is due when it has never been scheduled or its date has arrived.
pub fn is_due(next_review_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match next_review_date {
        Some(date) => date <= today,
        None => true,
    }
}

/// Same check over stored `YYYY-MM-DD` strings.
///
/// The format is fixed-width, so lexicographic order is date order.
pub fn is_due_str(next_review_date: Option<&str>, today: NaiveDate) -> bool {
    match next_review_date {
        Some(date) => date <= format_date(today).as_str(),
        None => true,
    }
}

/// Anything carrying a scheduling state, such as a stored flashcard row.
pub trait Scheduled {
    fn schedule(&self) -> &CardSchedule;
}

impl Scheduled for CardSchedule {
    fn schedule(&self) -> &CardSchedule {
        self
    }
}

/// Study queue containing cards to study.
#[derive(Debug, Clone, Serialize)]
pub struct StudyQueue<T> {
    pub new_cards: Vec<T>,
    pub review_cards: Vec<T>,
    pub new_remaining: usize,
    pub review_remaining: usize,
}

impl<T: Scheduled> StudyQueue<T> {
    /// Split cards into never-reviewed cards (in input order) and due review
    /// cards (most overdue first), each capped by its daily limit.
    pub fn build(
        cards: impl IntoIterator<Item = T>,
        today: NaiveDate,
        new_limit: usize,
        review_limit: usize,
    ) -> Self {
        let mut new_cards = Vec::new();
        let mut review_cards = Vec::new();

        for card in cards {
            match card.schedule().next_review_date {
                None => new_cards.push(card),
                Some(date) if date <= today => review_cards.push(card),
                Some(_) => {}
            }
        }

        // Stable sort keeps input order among cards due the same day.
        review_cards.sort_by_key(|card| card.schedule().next_review_date);
        new_cards.truncate(new_limit);
        review_cards.truncate(review_limit);

        let new_remaining = new_limit.saturating_sub(new_cards.len());
        let review_remaining = review_limit.saturating_sub(review_cards.len());

        Self {
            new_cards,
            review_cards,
            new_remaining,
            review_remaining,
        }
    }

    pub fn len(&self) -> usize {
        self.new_cards.len() + self.review_cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards in presentation order: new cards first, then reviews.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.new_cards.iter().chain(self.review_cards.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Debug, Clone)]
    struct Card {
        id: u32,
        schedule: CardSchedule,
    }

    impl Scheduled for Card {
        fn schedule(&self) -> &CardSchedule {
            &self.schedule
        }
    }

    fn card(id: u32, next: Option<NaiveDate>) -> Card {
        Card {
            id,
            schedule: CardSchedule {
                next_review_date: next,
                repetitions: u32::from(next.is_some()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn never_reviewed_is_due() {
        assert!(is_due(None, date(2024, 1, 1)));
        assert!(is_due_str(None, date(1970, 1, 1)));
    }

    #[test]
    fn due_today_and_overdue() {
        let today = date(2024, 3, 10);
        assert!(is_due(Some(today), today));
        assert!(is_due(Some(date(2024, 3, 9)), today));
        assert!(!is_due(Some(date(2024, 3, 11)), today));
    }

    #[test]
    fn string_comparison_matches_date_comparison() {
        let today = date(2024, 3, 10);
        assert!(is_due_str(Some("2024-03-10"), today));
        assert!(is_due_str(Some("2023-12-31"), today));
        assert!(!is_due_str(Some("2024-03-11"), today));
        assert!(!is_due_str(Some("2025-01-01"), today));
    }

    #[test]
    fn queue_splits_and_orders() {
        let today = date(2024, 3, 10);
        let cards = vec![
            card(1, Some(date(2024, 3, 9))),
            card(2, None),
            card(3, Some(date(2024, 3, 20))),
            card(4, Some(date(2024, 3, 1))),
            card(5, None),
            card(6, Some(today)),
        ];

        let queue = StudyQueue::build(cards, today, 20, 200);
        let new_ids: Vec<u32> = queue.new_cards.iter().map(|c| c.id).collect();
        let review_ids: Vec<u32> = queue.review_cards.iter().map(|c| c.id).collect();

        assert_eq!(new_ids, vec![2, 5]);
        assert_eq!(review_ids, vec![4, 1, 6]);
        assert_eq!(queue.new_remaining, 18);
        assert_eq!(queue.review_remaining, 197);
        assert_eq!(queue.len(), 5);
        let order: Vec<u32> = queue.iter().map(|c| c.id).collect();
        assert_eq!(order, vec![2, 5, 4, 1, 6]);
    }

    #[test]
    fn queue_respects_limits() {
        let today = date(2024, 3, 10);
        let cards = vec![
            card(1, None),
            card(2, None),
            card(3, Some(date(2024, 3, 5))),
            card(4, Some(date(2024, 3, 2))),
        ];

        let queue = StudyQueue::build(cards, today, 1, 1);
        assert_eq!(queue.new_cards[0].id, 1);
        assert_eq!(queue.review_cards[0].id, 4);
        assert_eq!(queue.new_remaining, 0);
        assert_eq!(queue.review_remaining, 0);
    }

    #[test]
    fn empty_queue_when_nothing_due() {
        let today = date(2024, 3, 10);
        let queue = StudyQueue::build(vec![card(1, Some(date(2024, 4, 1)))], today, 5, 5);
        assert!(queue.is_empty());
    }
}
