use error_stack::Report;

use kernel::interface::query::{DependOnReviewQuery, DependOnUserQuery, ReviewQuery, UserQuery};
use kernel::interface::update::{DependOnReviewModifier, ReviewModifier};
use kernel::prelude::entity::{NewReview, Rating, Review, ReviewSummary, ReviewText};
use kernel::KernelError;

use crate::transfer::{DeleteReviewDto, ListReviewsDto, SubmitReviewDto};

#[async_trait::async_trait]
pub trait ReviewService:
    'static + Sync + Send + DependOnReviewQuery + DependOnReviewModifier + DependOnUserQuery
{
    async fn list_reviews(
        &self,
        dto: ListReviewsDto,
    ) -> error_stack::Result<Vec<Review>, KernelError> {
        let reviews = self.review_query().find_all().await?;
        Ok(match dto.rating {
            Some(rating) => reviews
                .into_iter()
                .filter(|review| *review.rating() == rating)
                .collect(),
            None => reviews,
        })
    }

    /// Summary over every stored review, regardless of any list filter.
    async fn review_summary(&self) -> error_stack::Result<ReviewSummary, KernelError> {
        let reviews = self.review_query().find_all().await?;
        Ok(ReviewSummary::from_reviews(&reviews))
    }

    /// Posts a review in the name of whoever owns the session.
    async fn submit_review(&self, dto: SubmitReviewDto) -> error_stack::Result<NewReview, KernelError> {
        if !dto.rating.is_in_scale() {
            return Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "rating must be between {} and {}",
                Rating::MIN,
                Rating::MAX
            )));
        }
        let text = dto.text.trim();
        if text.is_empty() {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("review text is required".to_string()));
        }

        let user = self.user_query().find_current(&dto.session).await?;
        let review = NewReview::new(
            user.id().clone(),
            user.profile().name().clone(),
            dto.rating,
            ReviewText::new(text),
        );
        self.review_modifier().create(&review).await?;
        tracing::info!(user = %review.user_id().as_ref(), rating = dto.rating.as_ref(), "review posted");
        Ok(review)
    }

    async fn delete_review(&self, dto: DeleteReviewDto) -> error_stack::Result<(), KernelError> {
        self.review_modifier().delete(&dto.id).await
    }
}

impl<T> ReviewService for T where
    T: DependOnReviewQuery + DependOnReviewModifier + DependOnUserQuery
{
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use kernel::interface::query::{DependOnReviewQuery, DependOnUserQuery, ReviewQuery, UserQuery};
    use kernel::interface::update::{DependOnReviewModifier, ReviewModifier};
    use kernel::prelude::entity::{
        AccessToken, Address, City, EmailAddress, FullName, NewReview, NicNumber, PhoneNumber,
        Rating, Review, ReviewId, ReviewText, User, UserId, UserProfile, Username,
    };
    use kernel::KernelError;

    use super::ReviewService;
    use crate::transfer::{ListReviewsDto, SubmitReviewDto};

    fn review(id: &str, stars: u8) -> Review {
        Review::new(
            ReviewId::new(id),
            UserId::new("u9"),
            FullName::new("Ruwan"),
            Rating::new(stars),
            ReviewText::new("clean car"),
        )
    }

    struct Board {
        reviews: Vec<Review>,
        posted: Mutex<Vec<NewReview>>,
    }

    #[async_trait::async_trait]
    impl ReviewQuery for Board {
        async fn find_all(&self) -> error_stack::Result<Vec<Review>, KernelError> {
            Ok(self.reviews.clone())
        }
    }

    #[async_trait::async_trait]
    impl ReviewModifier for Board {
        async fn create(&self, review: &NewReview) -> error_stack::Result<(), KernelError> {
            self.posted.lock().unwrap().push(review.clone());
            Ok(())
        }

        async fn delete(&self, _: &ReviewId) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl UserQuery for Board {
        async fn find_current(&self, _: &AccessToken) -> error_stack::Result<User, KernelError> {
            Ok(User::new(
                UserId::new("u1"),
                UserProfile::new(
                    FullName::new("Dilani Jayasuriya"),
                    Username::new("dilani"),
                    EmailAddress::new("dilani@example.lk"),
                    City::new("Matara"),
                    Address::new("7 Beach Rd"),
                    PhoneNumber::new("0751112222"),
                    NicNumber::new("199512345678"),
                ),
            ))
        }

        async fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError> {
            Ok(Vec::new())
        }
    }

    impl DependOnReviewQuery for Board {
        type ReviewQuery = Self;
        fn review_query(&self) -> &Self::ReviewQuery {
            self
        }
    }

    impl DependOnReviewModifier for Board {
        type ReviewModifier = Self;
        fn review_modifier(&self) -> &Self::ReviewModifier {
            self
        }
    }

    impl DependOnUserQuery for Board {
        type UserQuery = Self;
        fn user_query(&self) -> &Self::UserQuery {
            self
        }
    }

    fn board() -> Board {
        Board {
            reviews: vec![review("r1", 5), review("r2", 4), review("r3", 5)],
            posted: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn filter_by_rating_keeps_summary_global() {
        let board = board();
        let fives = board
            .list_reviews(ListReviewsDto {
                rating: Some(Rating::new(5)),
            })
            .await
            .unwrap();
        assert_eq!(fives.len(), 2);

        let summary = board.review_summary().await.unwrap();
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.average(), 4.7);
    }

    #[tokio::test]
    async fn submission_takes_author_from_session() {
        let board = board();
        let posted = board
            .submit_review(SubmitReviewDto {
                session: AccessToken::new("jwt"),
                rating: Rating::new(4),
                text: "  Friendly staff  ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(posted.user_id(), &UserId::new("u1"));
        assert_eq!(posted.user_name(), &FullName::new("Dilani Jayasuriya"));
        assert_eq!(posted.text(), &ReviewText::new("Friendly staff"));
        assert_eq!(board.posted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn out_of_scale_or_empty_reviews_are_refused() {
        let board = board();
        for (stars, text) in [(0, "ok"), (6, "ok"), (3, "   ")] {
            let error = board
                .submit_review(SubmitReviewDto {
                    session: AccessToken::new("jwt"),
                    rating: Rating::new(stars),
                    text: text.to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(error.current_context(), KernelError::Invalid));
        }
        assert!(board.posted.lock().unwrap().is_empty());
    }
}
