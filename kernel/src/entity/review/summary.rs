use std::collections::BTreeMap;

use crate::entity::{Rating, Review};

/// Aggregate shown above the review list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    total: usize,
    average: f64,
    counts: BTreeMap<u8, usize>,
}

impl ReviewSummary {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut counts = (Rating::MIN..=Rating::MAX)
            .map(|stars| (stars, 0))
            .collect::<BTreeMap<u8, usize>>();
        let mut total = 0;
        let mut sum = 0u64;
        for review in reviews {
            let stars = *review.rating().as_ref();
            total += 1;
            sum += u64::from(stars);
            if let Some(count) = counts.get_mut(&stars) {
                *count += 1;
            }
        }
        let average = if total == 0 {
            0.0
        } else {
            (sum as f64 / total as f64 * 10.0).round() / 10.0
        };
        Self {
            total,
            average,
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Mean rating rounded to one decimal place; zero without reviews.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Review count for each star value from 1 to 5.
    pub fn counts(&self) -> &BTreeMap<u8, usize> {
        &self.counts
    }
}

#[cfg(test)]
mod test {
    use super::ReviewSummary;
    use crate::entity::{FullName, Rating, Review, ReviewId, ReviewText, UserId};

    fn review(stars: u8) -> Review {
        Review::new(
            ReviewId::new(format!("r{stars}")),
            UserId::new("u1"),
            FullName::new("Sunil"),
            Rating::new(stars),
            ReviewText::new("smooth ride"),
        )
    }

    #[test]
    fn empty_summary() {
        let reviews: Vec<Review> = Vec::new();
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.average(), 0.0);
        assert_eq!(summary.counts().len(), 5);
        assert!(summary.counts().values().all(|count| *count == 0));
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let reviews = [review(5), review(4), review(4)];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.average(), 4.3);
        assert_eq!(summary.counts()[&4], 2);
        assert_eq!(summary.counts()[&5], 1);
        assert_eq!(summary.counts()[&1], 0);
    }

    #[test]
    fn out_of_scale_ratings_count_toward_average_only() {
        let reviews = [review(0), review(5)];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.average(), 2.5);
        assert_eq!(summary.counts().values().sum::<usize>(), 1);
        assert!(!reviews[0].rating().is_in_scale());
    }
}
