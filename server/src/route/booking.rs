use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookingFormRequest, BookingTransformer, DatesRequest, FinishBookingRequest,
    ListBookingsRequest, PaymentIntentRequest, Session, SubmitBookingRequest,
};
use crate::response::{Acknowledge, BookingPresenter};
use application::service::{BookingService, ManageBookingService, PaymentService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/cars/:registration/booking",
            get(
                |State(module): State<AppModule>,
                 Path(registration): Path<String>,
                 session: Option<Session>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(BookingFormRequest::new(registration, session))
                        .handle(|dto| async move { module.booking_form(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Path(registration): Path<String>,
                 Json(req): Json<SubmitBookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .try_intake((registration, req))?
                        .handle(|dto| async move { module.submit_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/cars/:registration/booking/check",
            post(
                |State(module): State<AppModule>,
                 Path(registration): Path<String>,
                 Json(req): Json<DatesRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .try_intake((registration, req))?
                        .handle(|dto| async move { module.check_dates(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
        .route(
            "/bookings",
            get(
                |State(module): State<AppModule>, Query(req): Query<ListBookingsRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.list_bookings(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookingTransformer, Acknowledge(StatusCode::NO_CONTENT))
                        .intake(FinishBookingRequest::new(id))
                        .handle(|dto| async move { module.finish_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/payments/intent",
            post(
                |State(module): State<AppModule>, Json(req): Json<PaymentIntentRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.create_payment_intent(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
