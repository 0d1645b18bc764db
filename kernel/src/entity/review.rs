mod id;
mod rating;
mod summary;

pub use self::{id::*, rating::*, summary::*};
use crate::entity::{FullName, UserId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Review {
    id: ReviewId,
    user_id: UserId,
    user_name: FullName,
    rating: Rating,
    text: ReviewText,
}

impl Review {
    pub fn new(
        id: ReviewId,
        user_id: UserId,
        user_name: FullName,
        rating: Rating,
        text: ReviewText,
    ) -> Self {
        Self {
            id,
            user_id,
            user_name,
            rating,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct NewReview {
    user_id: UserId,
    user_name: FullName,
    rating: Rating,
    text: ReviewText,
}

impl NewReview {
    pub fn new(user_id: UserId, user_name: FullName, rating: Rating, text: ReviewText) -> Self {
        Self {
            user_id,
            user_name,
            rating,
            text,
        }
    }
}
