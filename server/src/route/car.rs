use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{CarRequest, CarTransformer, DeleteCarRequest, GetCarRequest, ListCarsRequest};
use crate::response::{Acknowledge, CarPresenter, CarResponse};
use application::service::{GetCarService, HandleCarService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

pub trait CarRouter {
    fn route_car(self) -> Self;
}

impl CarRouter for Router<AppModule> {
    fn route_car(self) -> Self {
        self.route(
            "/cars",
            get(
                |State(module): State<AppModule>, Query(req): Query<ListCarsRequest>| async move {
                    Controller::new(CarTransformer, CarPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.list_cars(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CarRequest>| async move {
                    Controller::new(CarTransformer, Acknowledge(StatusCode::CREATED))
                        .try_intake(req)?
                        .handle(|dto| async move { module.add_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/cars/:registration",
            get(
                |State(module): State<AppModule>, Path(registration): Path<String>| async move {
                    Controller::new(CarTransformer, CarPresenter)
                        .intake(GetCarRequest::new(registration))
                        .handle(|dto| async move { module.get_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(CarResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(registration): Path<String>,
                 Json(req): Json<CarRequest>| async move {
                    Controller::new(CarTransformer, Acknowledge(StatusCode::NO_CONTENT))
                        .try_intake((registration, req))?
                        .handle(|dto| async move { module.update_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(registration): Path<String>| async move {
                    Controller::new(CarTransformer, Acknowledge(StatusCode::NO_CONTENT))
                        .intake(DeleteCarRequest::new(registration))
                        .handle(|dto| async move { module.remove_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
