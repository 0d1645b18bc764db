use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{DestructNewReview, DestructReview, NewReview, Review, ReviewSummary};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    user_id: String,
    user_name: String,
    rating: u8,
    review_text: String,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let DestructReview {
            id,
            user_id,
            user_name,
            rating,
            text,
        } = value.into_destruct();
        Self {
            id: Some(id.into()),
            user_id: user_id.into(),
            user_name: user_name.into(),
            rating: rating.into(),
            review_text: text.into(),
        }
    }
}

/// Freshly posted review; the backend does not echo its id back.
#[derive(Debug)]
pub struct PostedReviewResponse(ReviewResponse);

impl IntoResponse for PostedReviewResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    total: usize,
    average: f64,
    counts: BTreeMap<u8, usize>,
}

pub struct ReviewPresenter;

impl Exhaust<Vec<Review>> for ReviewPresenter {
    type To = Json<Vec<ReviewResponse>>;
    fn emit(&self, input: Vec<Review>) -> Self::To {
        Json(input.into_iter().map(ReviewResponse::from).collect())
    }
}

impl Exhaust<NewReview> for ReviewPresenter {
    type To = PostedReviewResponse;
    fn emit(&self, input: NewReview) -> Self::To {
        let DestructNewReview {
            user_id,
            user_name,
            rating,
            text,
        } = input.into_destruct();
        PostedReviewResponse(ReviewResponse {
            id: None,
            user_id: user_id.into(),
            user_name: user_name.into(),
            rating: rating.into(),
            review_text: text.into(),
        })
    }
}

impl Exhaust<ReviewSummary> for ReviewPresenter {
    type To = Json<SummaryResponse>;
    fn emit(&self, input: ReviewSummary) -> Self::To {
        Json(SummaryResponse {
            total: input.total(),
            average: input.average(),
            counts: input.counts().clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{FullName, Rating, Review, ReviewId, ReviewSummary, ReviewText, UserId};

    use crate::controller::Exhaust;

    use super::ReviewPresenter;

    #[test]
    fn summary_lists_every_star() {
        let reviews = [4, 5, 5].map(|stars| {
            Review::new(
                ReviewId::new(format!("r{stars}")),
                UserId::new("u1"),
                FullName::new("Kamal"),
                Rating::new(stars),
                ReviewText::new("clean car"),
            )
        });
        let body = ReviewPresenter.emit(ReviewSummary::from_reviews(&reviews));
        assert_eq!(
            serde_json::to_value(&body.0).unwrap(),
            serde_json::json!({
                "total": 3,
                "average": 4.7,
                "counts": {"1": 0, "2": 0, "3": 0, "4": 1, "5": 2}
            })
        );
    }
}
