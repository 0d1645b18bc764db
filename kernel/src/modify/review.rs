use crate::entity::{NewReview, ReviewId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReviewModifier: 'static + Sync + Send {
    async fn create(&self, review: &NewReview) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, id: &ReviewId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReviewModifier: 'static + Sync + Send {
    type ReviewModifier: ReviewModifier;
    fn review_modifier(&self) -> &Self::ReviewModifier;
}
