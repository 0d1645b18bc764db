use kernel::prelude::entity::{AccessToken, Rating, ReviewId};

pub struct ListReviewsDto {
    pub rating: Option<Rating>,
}

pub struct SubmitReviewDto {
    pub session: AccessToken,
    pub rating: Rating,
    pub text: String,
}

pub struct DeleteReviewDto {
    pub id: ReviewId,
}
