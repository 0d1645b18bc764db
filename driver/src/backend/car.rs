use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::query::CarQuery;
use kernel::interface::update::CarModifier;
use kernel::prelude::entity::{
    Car, CarId, CarMake, CarModel, CarSpec, DestructCarSpec, FuelEfficiency, ImageUrl,
    PassengerCount, RegistrationNumber, RentPerDay,
};
use kernel::KernelError;

use crate::backend::wire::{number, whole, Envelope};
use crate::backend::BackendClient;

pub struct BackendCarRepository {
    client: BackendClient,
}

impl BackendCarRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl CarQuery for BackendCarRepository {
    async fn find_all(&self) -> error_stack::Result<Vec<Car>, KernelError> {
        let rows: Envelope<Vec<CarRow>> = self.client.get(&["cars"], None).await?;
        Ok(rows.into_inner().into_iter().map(Car::from).collect())
    }

    async fn find_by_registration(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        let found = self
            .client
            .get::<Option<Envelope<CarRow>>>(&["cars", registration.as_ref().as_str()], None)
            .await;
        match found {
            Ok(row) => Ok(row.map(|row| Car::from(row.into_inner()))),
            Err(report) if matches!(report.current_context(), KernelError::NotFound) => Ok(None),
            Err(report) => Err(report),
        }
    }
}

#[async_trait::async_trait]
impl CarModifier for BackendCarRepository {
    async fn create(&self, spec: &CarSpec) -> error_stack::Result<(), KernelError> {
        self.client
            .send(Method::POST, &["cars", "add"], None, &CarBody::from(spec))
            .await
    }

    async fn update(
        &self,
        registration: &RegistrationNumber,
        spec: &CarSpec,
    ) -> error_stack::Result<(), KernelError> {
        self.client
            .send(
                Method::PUT,
                &["cars", registration.as_ref().as_str()],
                None,
                &CarBody::from(spec),
            )
            .await
    }

    async fn delete(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<(), KernelError> {
        self.client
            .delete(&["cars", registration.as_ref().as_str()], None)
            .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarRow {
    #[serde(rename = "_id")]
    id: String,
    car_id: String,
    model: String,
    #[serde(default)]
    make: Option<String>,
    #[serde(deserialize_with = "number")]
    rent_per_day: f64,
    #[serde(deserialize_with = "number")]
    fuel_cost_per_km: f64,
    #[serde(deserialize_with = "number")]
    passenger_count: f64,
    #[serde(default)]
    image_url: String,
}

impl From<CarRow> for Car {
    fn from(value: CarRow) -> Self {
        Car::new(
            CarId::new(value.id),
            CarSpec::new(
                RegistrationNumber::new(value.car_id),
                CarModel::new(value.model),
                value
                    .make
                    .filter(|make| !make.trim().is_empty())
                    .map(CarMake::new),
                RentPerDay::new(whole(value.rent_per_day)),
                FuelEfficiency::new(value.fuel_cost_per_km),
                PassengerCount::new(whole(value.passenger_count).max(0) as u32),
                ImageUrl::new(value.image_url),
            ),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CarBody {
    car_id: String,
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    make: Option<String>,
    rent_per_day: i64,
    fuel_cost_per_km: f64,
    passenger_count: u32,
    image_url: String,
}

impl From<&CarSpec> for CarBody {
    fn from(value: &CarSpec) -> Self {
        let DestructCarSpec {
            registration,
            model,
            make,
            rent_per_day,
            fuel_efficiency,
            passenger_count,
            image_url,
        } = value.clone().into_destruct();
        Self {
            car_id: registration.into(),
            model: model.into(),
            make: make.map(Into::into),
            rent_per_day: rent_per_day.into(),
            fuel_cost_per_km: fuel_efficiency.into(),
            passenger_count: passenger_count.into(),
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{Car, CarModel, PassengerCount, RegistrationNumber, RentPerDay};

    use super::{CarBody, CarRow};
    use crate::backend::wire::Envelope;

    #[test]
    fn decodes_wrapped_and_string_typed_cars() {
        let raw = r#"{"data":{"_id":"665f","carId":"CAB-1234","model":"Prius",
            "rentPerDay":"8500","fuelCostPerKm":18.2,"passengerCount":"4",
            "imageUrl":"https://img.example/p.png","__v":0}}"#;
        let row: Envelope<CarRow> = serde_json::from_str(raw).unwrap();
        let car = Car::from(row.into_inner());
        assert_eq!(car.spec().registration(), &RegistrationNumber::new("CAB-1234"));
        assert_eq!(car.spec().model(), &CarModel::new("Prius"));
        assert_eq!(car.spec().rent_per_day(), &RentPerDay::new(8500));
        assert_eq!(car.spec().passenger_count(), &PassengerCount::new(4));
        assert!(car.spec().make().is_none());
    }

    #[test]
    fn body_uses_backend_field_names() {
        let raw = r#"{"_id":"1","carId":"CAA-1","model":"Axio","make":"Toyota",
            "rentPerDay":6000,"fuelCostPerKm":15,"passengerCount":5}"#;
        let car = Car::from(serde_json::from_str::<CarRow>(raw).unwrap());
        let body = serde_json::to_value(CarBody::from(car.spec())).unwrap();
        assert_eq!(body["carId"], "CAA-1");
        assert_eq!(body["make"], "Toyota");
        assert_eq!(body["rentPerDay"], 6000);
        assert_eq!(body["passengerCount"], 5);
    }
}
