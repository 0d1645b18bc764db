use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{Car, DestructCar, DestructCarSpec};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    id: String,
    registration: String,
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    make: Option<String>,
    rent_per_day: i64,
    fuel_efficiency: f64,
    passenger_count: u32,
    image_url: String,
}

impl From<Car> for CarResponse {
    fn from(value: Car) -> Self {
        let DestructCar { id, spec } = value.into_destruct();
        let DestructCarSpec {
            registration,
            model,
            make,
            rent_per_day,
            fuel_efficiency,
            passenger_count,
            image_url,
        } = spec.into_destruct();
        Self {
            id: id.into(),
            registration: registration.into(),
            model: model.into(),
            make: make.map(Into::into),
            rent_per_day: rent_per_day.into(),
            fuel_efficiency: fuel_efficiency.into(),
            passenger_count: passenger_count.into(),
            image_url: image_url.into(),
        }
    }
}

impl IntoResponse for CarResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CarPresenter;

impl Exhaust<Option<Car>> for CarPresenter {
    type To = Option<CarResponse>;
    fn emit(&self, input: Option<Car>) -> Self::To {
        input.map(CarResponse::from)
    }
}

impl Exhaust<Vec<Car>> for CarPresenter {
    type To = Json<Vec<CarResponse>>;
    fn emit(&self, input: Vec<Car>) -> Self::To {
        Json(input.into_iter().map(CarResponse::from).collect())
    }
}
