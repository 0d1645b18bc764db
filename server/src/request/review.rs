use garde::Validate;
use serde::Deserialize;

use application::transfer::{DeleteReviewDto, ListReviewsDto, SubmitReviewDto};
use kernel::prelude::entity::{Rating, ReviewId};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use crate::request::Session;

#[derive(Debug, Deserialize)]
pub struct ListReviewsRequest {
    rating: Option<u8>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    #[garde(range(min = 1, max = 5))]
    rating: u8,
    #[garde(length(min = 1))]
    review_text: String,
}

#[derive(Debug)]
pub struct DeleteReviewRequest {
    id: String,
}

impl DeleteReviewRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct ReviewTransformer;

impl Intake<ListReviewsRequest> for ReviewTransformer {
    type To = ListReviewsDto;
    fn emit(&self, input: ListReviewsRequest) -> Self::To {
        ListReviewsDto {
            rating: input.rating.map(Rating::new),
        }
    }
}

impl TryIntake<(Session, SubmitReviewRequest)> for ReviewTransformer {
    type To = SubmitReviewDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (Session, SubmitReviewRequest)) -> Result<Self::To, Self::Error> {
        let (session, input) = input;
        input.validate()?;
        Ok(SubmitReviewDto {
            session: session.token(),
            rating: Rating::new(input.rating),
            text: input.review_text,
        })
    }
}

impl Intake<DeleteReviewRequest> for ReviewTransformer {
    type To = DeleteReviewDto;
    fn emit(&self, input: DeleteReviewRequest) -> Self::To {
        DeleteReviewDto {
            id: ReviewId::new(input.id),
        }
    }
}
