use crate::entity::Review;
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReviewQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Review>, KernelError>;
}

pub trait DependOnReviewQuery: Sync + Send + 'static {
    type ReviewQuery: ReviewQuery;
    fn review_query(&self) -> &Self::ReviewQuery;
}
