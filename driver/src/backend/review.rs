use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::query::ReviewQuery;
use kernel::interface::update::ReviewModifier;
use kernel::prelude::entity::{
    DestructNewReview, FullName, NewReview, Rating, Review, ReviewId, ReviewText, UserId,
};
use kernel::KernelError;

use crate::backend::wire::{number, whole, Envelope};
use crate::backend::BackendClient;

pub struct BackendReviewRepository {
    client: BackendClient,
}

impl BackendReviewRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ReviewQuery for BackendReviewRepository {
    async fn find_all(&self) -> error_stack::Result<Vec<Review>, KernelError> {
        let rows: Envelope<Vec<ReviewRow>> = self.client.get(&["review"], None).await?;
        Ok(rows.into_inner().into_iter().map(Review::from).collect())
    }
}

#[async_trait::async_trait]
impl ReviewModifier for BackendReviewRepository {
    async fn create(&self, review: &NewReview) -> error_stack::Result<(), KernelError> {
        self.client
            .send(Method::POST, &["review"], None, &ReviewBody::from(review))
            .await
    }

    async fn delete(&self, id: &ReviewId) -> error_stack::Result<(), KernelError> {
        self.client
            .delete(&["review", id.as_ref().as_str()], None)
            .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRow {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    user_name: String,
    #[serde(deserialize_with = "number")]
    rating: f64,
    #[serde(default)]
    review_text: String,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        // out-of-range values are kept visible as 0 rather than wrapped
        let stars = u8::try_from(whole(value.rating)).unwrap_or(0);
        Review::new(
            ReviewId::new(value.id),
            UserId::new(value.user_id),
            FullName::new(value.user_name),
            Rating::new(stars),
            ReviewText::new(value.review_text),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewBody {
    user_id: String,
    user_name: String,
    rating: u8,
    review_text: String,
}

impl From<&NewReview> for ReviewBody {
    fn from(value: &NewReview) -> Self {
        let DestructNewReview {
            user_id,
            user_name,
            rating,
            text,
        } = value.clone().into_destruct();
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            rating: rating.into(),
            review_text: text.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{Rating, Review, ReviewText};

    use super::ReviewRow;

    #[test]
    fn decodes_reviews() {
        let raw = r#"[{"_id":"r1","userId":"u1","userName":"Ruwan","rating":4,"reviewText":"Nice"},
                      {"_id":"r2","userId":"u2","userName":"Mala","rating":"5","reviewText":"Great"},
                      {"_id":"r3","userId":"u3","userName":"Odd","rating":-3,"reviewText":"?"}]"#;
        let reviews = serde_json::from_str::<Vec<ReviewRow>>(raw)
            .unwrap()
            .into_iter()
            .map(Review::from)
            .collect::<Vec<_>>();
        assert_eq!(reviews[0].rating(), &Rating::new(4));
        assert_eq!(reviews[0].text(), &ReviewText::new("Nice"));
        assert_eq!(reviews[1].rating(), &Rating::new(5));
        assert!(!reviews[2].rating().is_in_scale());
    }
}
