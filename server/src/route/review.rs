use crate::controller::{Controller, Exhaust};
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    DeleteReviewRequest, ListReviewsRequest, ReviewTransformer, Session, SubmitReviewRequest,
};
use crate::response::{Acknowledge, ReviewPresenter};
use application::service::ReviewService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};

pub trait ReviewRouter {
    fn route_review(self) -> Self;
}

impl ReviewRouter for Router<AppModule> {
    fn route_review(self) -> Self {
        self.route(
            "/reviews",
            get(
                |State(module): State<AppModule>, Query(req): Query<ListReviewsRequest>| async move {
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.list_reviews(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 session: Session,
                 Json(req): Json<SubmitReviewRequest>| async move {
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .try_intake((session, req))?
                        .handle(|dto| async move { module.submit_review(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reviews/summary",
            get(|State(module): State<AppModule>| async move {
                module
                    .review_summary()
                    .await
                    .map(|summary| ReviewPresenter.emit(summary))
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/reviews/:id",
            delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(ReviewTransformer, Acknowledge(StatusCode::NO_CONTENT))
                        .intake(DeleteReviewRequest::new(id))
                        .handle(|dto| async move { module.delete_review(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
